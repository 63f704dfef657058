use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading record store '{path}'.", { path: &str });
define_internal_error!(WriteError, "Error writing record store '{path}'.", { path: &str });
define_internal_error!(SerializeError, "Could not serialize {record_type} records.", { record_type: &str });
define_client_error!(
    MalformedStore,
    "Record store '{path}' does not contain a valid {record_type} list.",
    { path: &str, record_type: &str }
);

// Store-related.
define_client_error!(
    IdSpaceExhausted,
    "No {record_type} id left to assign: the store already holds the largest possible id.",
    { record_type: &str }
);

// Parsing-related.
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidTimestamp, "Invalid timestamp: {timestamp}.", { timestamp: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(
    InvalidStatus,
    "Invalid status '{value}'. Use todo, in-progress, done.",
    { value: &str }
);
define_client_error!(
    InvalidMonth,
    "Invalid month '{value}'. Expected a number between 1 and 12.",
    { value: &str }
);
define_client_error!(
    InvalidAmount,
    "Invalid amount: '{value}'. Expected a non-negative number.",
    { value: &str }
);
