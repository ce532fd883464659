pub mod stats_refresh;
