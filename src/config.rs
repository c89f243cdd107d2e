//! Deployment constants.
//! Used by: main, handlers, telemetry.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const PORT: u16 = 7881;

pub const ROOT_BODY: &str = "<h1>Welcome to the ECS-powered Flask Application!</h1>\
<p>This application is running successfully on AWS ECS. <br>\
Docker and ECS are seamlessly powering this Hello World app.</p>";

pub const HEALTH_BODY: &str = "Server is up and running on AWS ECS";

/// Used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "ecs_hello=info,tower_http=info";

pub fn bind_addr() -> SocketAddr {
    SocketAddr::new(BIND_HOST, PORT)
}
