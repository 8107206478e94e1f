/// Helper macro to avoid retyping the API group of the Camel-K custom resources when creating
/// further string constants from it. When given no parameters, this returns the API group. When
/// given a string literal parameter it adds `/parameter` to the end.
macro_rules! camel {
    () => {
        "camel.apache.org"
    };
    ($s:literal) => {
        concat!(camel!(), "/", $s)
    };
}

// Kamelet resource identifiers
pub const GROUP: &str = camel!();
pub const VERSION: &str = "v1alpha1";
pub const API_VERSION: &str = camel!("v1alpha1");
pub const KIND: &str = "Kamelet";
pub const PLURAL: &str = "kamelets";

// Server-side apply
pub const DEFAULT_FIELD_MANAGER: &str = "kamelet-sync";

// The literal shape accepted by `import`
pub const IMPORT_ID_FORMAT: &str = "namespace/name";

#[test]
fn camel_constants_macro_test() {
    assert_eq!("camel.apache.org", camel!());
    assert_eq!("camel.apache.org/v1alpha1", API_VERSION);
    assert_eq!("camel.apache.org/foo", camel!("foo"));
}
