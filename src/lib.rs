pub mod auto_run;
pub mod error;
pub mod maximum_flow;
pub mod text_format;
