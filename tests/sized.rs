mod cases;

use ilang::{Category, NumericFamily, StringEncoding};

type_case!(
    boolean_one_bit,
    build: |store| store.get_boolean_type(1),
    display: "Boolean1",
    signature: "b1",
    category: Some(Category::Natural),
);

type_case!(
    natural_eight,
    build: |store| store.get_natural_type(8),
    display: "Natural8",
    signature: "n8",
    category: Some(Category::Integer),
);

type_case!(
    integer_thirty_two,
    build: |store| store.get_integer_type(32),
    display: "Integer32",
    signature: "z32",
    category: Some(Category::Rational),
);

type_case!(
    rational_sixty_four,
    build: |store| store.get_rational_type(64),
    display: "Rational64",
    signature: "q64",
    category: Some(Category::Real),
);

type_case!(
    real_sixty_four,
    build: |store| store.get_real_type(64),
    display: "Real64",
    signature: "r64",
    category: Some(Category::Complex),
);

type_case!(
    imaginary_thirty_two,
    build: |store| store.get_imaginary_type(32),
    display: "Imaginary32",
    signature: "i32",
    category: Some(Category::Complex),
);

type_case!(
    complex_one_twenty_eight,
    build: |store| store.get_complex_type(128),
    display: "Complex128",
    signature: "c128",
    category: Some(Category::Number),
);

type_case!(
    generic_sized_entry_point,
    build: |store| store.get_sized_type(NumericFamily::Natural, 16),
    display: "Natural16",
    signature: "n16",
    category: Some(Category::Natural),
);

type_case!(
    zero_bits_is_the_root,
    build: |store| store.get_integer_type(0),
    display: "Integer",
    signature: "z?",
    category: Some(Category::Integer),
);

type_case!(
    ascii_string,
    build: |store| store.get_string_type(Some(StringEncoding::Ascii)),
    display: "AsciiString",
    signature: "sa8",
    category: Some(Category::String),
);

type_case!(
    utf8_string,
    build: |store| store.get_string_type(Some(StringEncoding::Utf8)),
    display: "Utf8String",
    signature: "su8",
    category: Some(Category::String),
);
