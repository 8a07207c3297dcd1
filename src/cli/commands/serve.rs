//! HTTP conversion endpoint.

use anyhow::Context;
use tokio::runtime::Runtime;

use crate::convert::ConversionService;
use crate::server;

/// Serve the conversion endpoint until Ctrl-C
pub fn cmd_serve(rt: &Runtime, service: ConversionService, bind: &str) -> anyhow::Result<()> {
    println!("Serving POST /convert on http://{}", bind);

    rt.block_on(server::serve(bind, service))
        .with_context(|| format!("Server on {} failed", bind))
}
