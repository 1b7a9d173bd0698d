pub mod chart;
pub mod http_client;
pub mod pbp_fetch;
pub mod schedule_fetch;
pub mod state;
pub mod worker;
