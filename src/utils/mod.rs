pub mod local_trace;
