use anyhow::{Context as AnyhowContext, Result};
use std::net::SocketAddr;

/// Where `serve-http` is about to listen, checked against `--public`.
#[derive(Debug)]
pub(crate) struct BindPlan {
    pub(crate) addrs: Vec<SocketAddr>,
    pub(crate) public: bool,
}

impl BindPlan {
    /// Resolves `bind` and refuses non-loopback addresses unless `public` is set.
    pub(crate) async fn resolve(bind: &str, public: bool) -> Result<Self> {
        // Tokio's resolver makes "localhost:5000" work.
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(bind)
            .await
            .with_context(|| format!("Failed to resolve bind address: {bind}"))?
            .collect();
        if addrs.is_empty() {
            anyhow::bail!("Bind address resolved to zero socket addrs: {bind}")
        }

        let plan = Self { addrs, public };
        if plan.exposes_non_loopback() && !plan.public {
            anyhow::bail!(
                "Refusing to bind to non-loopback address without --public: {bind}. Every request is forwarded to the upstream provider with your API key; pass --public to expose it anyway."
            )
        }
        Ok(plan)
    }

    fn exposes_non_loopback(&self) -> bool {
        self.addrs.iter().any(|addr| !addr.ip().is_loopback())
    }

    pub(crate) fn describe(&self) -> String {
        self.addrs
            .iter()
            .map(SocketAddr::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
