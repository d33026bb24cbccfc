pub mod event_reader;
pub mod response_writer;
