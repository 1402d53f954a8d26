/// Declares the view-state `Globals` struct, its lazily created instance and
/// one accessor per signal.
///
/// ```ignore
/// view_signals! {
///     search_query_signal => search_query: SearchQuery = SearchQuery::default(),
/// }
/// ```
///
/// Initial values are evaluated in declaration order on first access.
#[macro_export]
macro_rules! view_signals {
    ( $( $accessor:ident => $field:ident : $ty:ty = $init:expr ),+ $(,)? ) => {
        pub struct Globals {
            $( pub $field: ::leptos::RwSignal<$ty>, )+
        }

        static GLOBALS: ::once_cell::sync::OnceCell<Globals> = ::once_cell::sync::OnceCell::new();

        pub fn globals() -> &'static Globals {
            GLOBALS.get_or_init(|| Globals {
                $( $field: ::leptos::create_rw_signal($init), )+
            })
        }

        $(
            pub fn $accessor() -> ::leptos::RwSignal<$ty> {
                globals().$field
            }
        )+
    };
}
