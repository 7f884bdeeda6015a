mod message;

use proc_macro::TokenStream;

use message::Kind;

// ============================================================================
// #[derive(Command)]
// ============================================================================

/// Derive macro that turns a plain struct into a command message.
///
/// Implements `cqrs_bus::Message` (with `KIND = MessageKind::Command`) and
/// `cqrs_bus::Command`.
///
/// # Usage
///
/// ```ignore
/// #[derive(Command)]
/// #[command(output = u64)]
/// struct CreateUser {
///     username: String,
///     email: String,
/// }
/// ```
///
/// Supported arguments:
/// - `output = Type`: the value a handler returns (default `()`)
/// - `name = "..."`: the name used in logs and errors (default: type name)
#[proc_macro_derive(Command, attributes(command))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    message::derive_message(input, Kind::Command)
}

// ============================================================================
// #[derive(Query)]
// ============================================================================

/// Derive macro that turns a plain struct into a query message.
///
/// ```ignore
/// #[derive(Query)]
/// #[query(output = UserDto)]
/// struct GetUser {
///     user_id: u64,
/// }
/// ```
///
/// Accepts the same arguments as `#[derive(Command)]`.
#[proc_macro_derive(Query, attributes(query))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    message::derive_message(input, Kind::Query)
}

// ============================================================================
// #[derive(Event)]
// ============================================================================

/// Derive macro that turns a plain struct into an event message.
///
/// Events have no output. Only `name = "..."` is accepted.
///
/// ```ignore
/// #[derive(Clone, Event)]
/// #[event(name = "user.created")]
/// struct UserCreated {
///     user_id: u64,
/// }
/// ```
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    message::derive_message(input, Kind::Event)
}
