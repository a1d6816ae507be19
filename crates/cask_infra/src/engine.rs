use async_trait::async_trait;
use cask_domain::{ContainerQuery, Directory, Environment};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct ContainerSummary {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Names", default)]
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NetworkSummary {
    #[serde(rename = "Name")]
    name: String,
}

/// Resolves container and network names through the engine HTTP API.
pub struct EngineDirectory {
    client: Client,
    environment: Environment,
}

impl EngineDirectory {
    pub fn new(environment: &Environment) -> Result<Self> {
        let client = Client::builder()
            .timeout(environment.lookup_timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client, environment: environment.clone() })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.environment.engine_url().map_err(Error::Config)?;
        base.join(path)
            .map_err(|e| Error::Config(cask_domain::Error::InvalidHost(base.to_string(), e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "Querying engine");

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Request(url.to_string(), e))?;

        if !response.status().is_success() {
            return Err(Error::Status(url.to_string(), response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Decode(url.to_string(), e))
    }

    pub async fn list_containers(&self, query: &ContainerQuery) -> Result<Vec<String>> {
        let params: &[(&str, &str)] = if query.all { &[("all", "1")] } else { &[] };
        let containers = self
            .get_json::<Vec<ContainerSummary>>("containers/json", params)
            .await?;

        Ok(containers
            .into_iter()
            .flat_map(|container| {
                let id = query.include_ids.then_some(container.id);
                let names = container
                    .names
                    .into_iter()
                    .map(|name| name.trim_start_matches('/').to_string());
                id.into_iter().chain(names)
            })
            .filter(|name| name.starts_with(&query.prefix))
            .collect())
    }

    pub async fn list_networks(&self, prefix: &str) -> Result<Vec<String>> {
        let networks = self.get_json::<Vec<NetworkSummary>>("networks", &[]).await?;
        Ok(networks
            .into_iter()
            .map(|network| network.name)
            .filter(|name| name.starts_with(prefix))
            .collect())
    }
}

#[async_trait]
impl Directory for EngineDirectory {
    async fn containers(&self, query: &ContainerQuery) -> anyhow::Result<Vec<String>> {
        Ok(self.list_containers(query).await?)
    }

    async fn networks(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        Ok(self.list_networks(prefix).await?)
    }
}

/// Stands in for the engine when it cannot be reached at all, e.g. because its
/// address is misconfigured. Every lookup fails with `reason`.
#[derive(Debug, Clone)]
pub struct UnavailableDirectory {
    reason: String,
}

impl UnavailableDirectory {
    pub fn new(reason: impl ToString) -> Self {
        Self { reason: reason.to_string() }
    }
}

#[async_trait]
impl Directory for UnavailableDirectory {
    async fn containers(&self, _: &ContainerQuery) -> anyhow::Result<Vec<String>> {
        Err(anyhow::anyhow!("Engine unavailable: {}", self.reason))
    }

    async fn networks(&self, _: &str) -> anyhow::Result<Vec<String>> {
        Err(anyhow::anyhow!("Engine unavailable: {}", self.reason))
    }
}
