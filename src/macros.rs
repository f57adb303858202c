/// Generate accessor functions for signals living in the global registry.
///
/// Usage:
/// `global_signals! {
///     pub accessor_name => field_name: Type,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
