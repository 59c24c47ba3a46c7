//! Macros for ergonomic state machine construction.

/// Declare a state machine inline.
///
/// Expands to an [`FsmBuilder`](crate::builder::FsmBuilder) chain and
/// evaluates to `Result<Fsm, FsmError>`. State and action names are written
/// as bare identifiers and checked against the name grammar at build time.
///
/// # Example
///
/// ```
/// use named_fsm::fsm;
///
/// let mut toggle = fsm! {
///     name: "Basic Disabled/Enabled",
///     transitions: [
///         DISABLED => ENABLED : ENABLE,
///         ENABLED => DISABLED : DISABLE,
///     ],
///     initial: DISABLED,
/// }
/// .unwrap();
///
/// toggle.exec("ENABLE", "ENABLED").unwrap();
/// assert_eq!(toggle.get_state(), "ENABLED");
/// ```
#[macro_export]
macro_rules! fsm {
    (
        name: $name:expr,
        $(states: [$($state:ident),* $(,)?],)?
        transitions: [
            $($from:ident => $to:ident : $action:ident),* $(,)?
        ]
        $(, initial: $initial:ident)?
        $(,)?
    ) => {
        $crate::builder::FsmBuilder::new($name)
            $($(.state(stringify!($state)))*)?
            $(.transition(stringify!($from), stringify!($to), stringify!($action)))*
            $(.initial(stringify!($initial)))?
            .build()
    };
}
