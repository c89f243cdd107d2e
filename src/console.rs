//! Startup output for operators watching the container log.

use std::net::SocketAddr;

use colored::Colorize;

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════╗".cyan());
    println!("║  {}  ║", format!("{:<39}", "ecs-hello v0.1.0").bold().white());
    println!("║  {}  ║", format!("{:<39}", "Hello World service for AWS ECS").dimmed());
    println!("{}", "╚═══════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: SocketAddr) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{addr}").cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}        {}", "GET".green(), "/".white(), "Welcome page".dimmed());
    println!("  {} {}  {}", "GET".green(), "/health".white(), "Health check".dimmed());
    println!();
}
