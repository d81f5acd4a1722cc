mod backend_error_message_test;
