use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

/// Tells the invoking shell how to present a set of candidates.
///
/// Every flag is independent of the others. A directive is produced together
/// with its candidates and never changed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directive {
    /// Something went wrong while completing; the shell should ignore the
    /// candidates.
    pub error: bool,
    /// Do not add a space after the completed value.
    pub no_space: bool,
    /// Do not fall back to filesystem paths when there are no candidates.
    pub no_file_comp: bool,
    /// Use the candidates as given, without sorting or filtering them again.
    pub no_further_processing: bool,
}

const ERROR_BIT: u32 = 1;
const NO_SPACE_BIT: u32 = 1 << 1;
const NO_FILE_COMP_BIT: u32 = 1 << 2;
const NO_FURTHER_PROCESSING_BIT: u32 = 1 << 5;

impl Directive {
    pub const DEFAULT: Self = Self {
        error: false,
        no_space: false,
        no_file_comp: false,
        no_further_processing: false,
    };
    pub const ERROR: Self = Self { error: true, ..Self::DEFAULT };
    pub const NO_SPACE: Self = Self { no_space: true, ..Self::DEFAULT };
    pub const NO_FILE_COMP: Self = Self { no_file_comp: true, ..Self::DEFAULT };
    pub const NO_FURTHER_PROCESSING: Self = Self { no_further_processing: true, ..Self::DEFAULT };

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Integer encoding understood by the generated shell scripts.
    pub fn bits(&self) -> u32 {
        [
            (self.error, ERROR_BIT),
            (self.no_space, NO_SPACE_BIT),
            (self.no_file_comp, NO_FILE_COMP_BIT),
            (self.no_further_processing, NO_FURTHER_PROCESSING_BIT),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(0, |bits, (_, bit)| bits | bit)
    }
}

impl BitOr for Directive {
    type Output = Directive;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            error: self.error || rhs.error,
            no_space: self.no_space || rhs.no_space,
            no_file_comp: self.no_file_comp || rhs.no_file_comp,
            no_further_processing: self.no_further_processing || rhs.no_further_processing,
        }
    }
}

impl BitOrAssign for Directive {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_default() {
            return write!(f, "default");
        }

        let names = [
            (self.error, "error"),
            (self.no_space, "no-space"),
            (self.no_file_comp, "no-file-comp"),
            (self.no_further_processing, "no-further-processing"),
        ]
        .into_iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| name)
        .collect::<Vec<_>>();

        write!(f, "{}", names.join(", "))
    }
}
