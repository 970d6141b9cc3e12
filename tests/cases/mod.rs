//! Shared harness for the naming tests.
//!
//! Each case builds one type in a fresh store and checks its display name,
//! signature and placement, then checks that building it again returns the
//! same handle without growing the store.

#[macro_export]
macro_rules! type_case {
    (
        $test_name:ident,
        build: |$store:ident| $body:expr,
        display: $display:expr,
        signature: $signature:expr,
        category: $category:expr $(,)?
    ) => {
        #[test]
        fn $test_name() {
            let arena = ::ilang::Bump::new();
            let store = ::ilang::TypeStore::new(&arena);
            fn build(
                $store: ::ilang::TypeStore<'_>,
            ) -> ::ilang::TypeResult<'_> {
                $body
            }

            let (store, ty) = build(store);
            ::pretty_assertions::assert_eq!(ty.display_name(), $display);
            ::pretty_assertions::assert_eq!(ty.signature(), $signature);
            let category: Option<::ilang::Category> = $category;
            match category {
                Some(category) => assert!(
                    store.is_category(ty, category),
                    "{} should be in {}",
                    ty,
                    category
                ),
                // Sums and products hang directly off the universal type.
                None => assert!(ty.is_root_type(), "{} should be a root", ty),
            }

            let len = store.len();
            let (store, again) = build(store);
            ::pretty_assertions::assert_eq!(again, ty);
            ::pretty_assertions::assert_eq!(store.len(), len);
            ::pretty_assertions::assert_eq!(store.find_type_by_signature($signature), Some(ty));
        }
    };
}
