#![cfg(feature = "serde")]

use mdbalance::Options;

#[test]
fn partial_config_keeps_defaults() {
    let opts: Options = serde_json::from_str(r#"{"strikethrough": false}"#).unwrap();
    assert_eq!(
        opts,
        Options {
            strikethrough: false,
            ..Options::default()
        }
    );
}

#[test]
fn options_serialize_every_field() {
    let value = serde_json::to_value(Options::none()).unwrap();
    assert_eq!(value["code_fences"], false);
    assert_eq!(value["inline_code"], false);
    assert_eq!(value["emphasis"], false);
    assert_eq!(value["strikethrough"], false);
}
