pub mod commands;
pub mod launch_stages;
pub mod rocket;
