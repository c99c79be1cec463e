//! MCP handlers for actix-web.
//!
//! Stateless HTTP POST only; each request is independent and no SSE
//! connection is maintained.

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::mcp::rpc::RpcRequest;
use crate::mcp::service::McpService;
use crate::state::AppState;

pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp.
pub async fn rpc_handler(
    state: web::Data<Arc<McpState>>,
    app_state: web::Data<AppState>,
    body: web::Json<RpcRequest>,
) -> impl Responder {
    log::info!("received MCP request: {}", body.method);

    if let Some(response) = state
        .service
        .handle_request(body.into_inner(), &app_state)
        .await
    {
        return HttpResponse::Ok()
            .content_type("application/json")
            .json(response);
    }

    // Notifications return 202 Accepted
    HttpResponse::Accepted().finish()
}

/// Configure MCP routes (stateless).
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mcp").route(web::post().to(rpc_handler)));

    // Kept for clients configured against the old endpoint name
    cfg.service(web::resource("/sse").route(web::post().to(rpc_handler)));
}
