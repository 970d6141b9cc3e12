mod cases;

use ilang::{Category, TypeHandle, TypeResult, TypeStore};

fn int_and_text(store: TypeStore<'_>) -> TypeResult<'_, [TypeHandle<'_>; 2]> {
    let (store, int32) = store.get_integer_type(32);
    let (store, text) = store.get_string_type(None);
    (store, [int32, text])
}

type_case!(
    product_keeps_order,
    build: |store| {
        let (store, [int32, text]) = int_and_text(store);
        let (store, pair) = store.get_product_type(&[int32, text]);
        (store, pair.unwrap())
    },
    display: "Integer32 * String",
    signature: "p2z32s?",
    category: None,
);

type_case!(
    sum_is_sorted_by_signature,
    build: |store| {
        let (store, [int32, text]) = int_and_text(store);
        let (store, sum) = store.get_sum_type(&[text, int32, text]);
        (store, sum.unwrap())
    },
    display: "String | Integer32",
    signature: "u2s?z32",
    category: None,
);

type_case!(
    function_of_two_params,
    build: |store| {
        let (store, [int32, text]) = int_and_text(store);
        let (store, boolean) = store.get_boolean_type(0);
        let (store, func) = store.get_function_type(&[int32, text], boolean);
        (store, func.unwrap())
    },
    display: "Integer32 -> String -> Boolean",
    signature: "f2b?z32s?",
    category: Some(Category::Function),
);
