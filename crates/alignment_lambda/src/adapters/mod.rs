pub mod dynamo;
pub mod session_store;
