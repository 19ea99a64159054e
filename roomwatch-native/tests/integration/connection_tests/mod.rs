mod test_connect_failure_retries;
mod test_connects_to_room_endpoint;
mod test_no_room_never_connects;
mod test_shutdown_closes_connection;
