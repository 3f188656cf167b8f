use path_template_rs::{PathTemplate, TemplateOptions, TemplateParams};

fn compile(template: &str) -> PathTemplate {
    PathTemplate::new(template).expect("template should compile")
}

fn param<'a>(params: &'a TemplateParams, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str)
}

#[test]
fn extract_when_named_parameters_then_returns_each_value() {
    let template = compile("/artist/:artistId/album/:albumId");
    let params = template.extract("/artist/123/album/456");

    assert_eq!(params.len(), 2);
    assert_eq!(param(&params, "artistId"), Some("123"));
    assert_eq!(param(&params, "albumId"), Some("456"));
}

#[test]
fn extract_when_template_has_no_parameters_then_always_empty() {
    let template = compile("/about");

    assert!(template.is_match("/about"));
    assert!(template.extract("/about").is_empty());
    assert!(template.extract("/elsewhere").is_empty());
}

#[test]
fn extract_when_path_does_not_match_then_returns_empty() {
    let template = compile("/users/:id");
    assert!(template.extract("/accounts/1").is_empty());
    assert!(template.extract("").is_empty());
}

#[test]
fn extract_when_repeated_parameter_then_returns_joined_capture() {
    let template = compile("/user/:ids+");
    let params = template.extract("/user/123/456/789");

    assert_eq!(param(&params, "ids"), Some("123/456/789"));
}

#[test]
fn extract_when_zero_or_more_spans_segments_then_captures_them_all() {
    let template = compile(":scheme://:hostname/:path*");
    let params = template.extract("https://www.github.com/gjeck/path-template");

    assert_eq!(params.len(), 3);
    assert_eq!(param(&params, "scheme"), Some("https"));
    assert_eq!(param(&params, "hostname"), Some("www.github.com"));
    assert_eq!(param(&params, "path"), Some("gjeck/path-template"));
}

#[test]
fn extract_when_optional_parameter_absent_then_binds_empty_string() {
    let template = compile(":scheme://:hostname/:path*");
    let params = template.extract("https://www.github.com/");

    assert_eq!(param(&params, "scheme"), Some("https"));
    assert_eq!(param(&params, "hostname"), Some("www.github.com"));
    assert_eq!(param(&params, "path"), Some(""));
}

#[test]
fn extract_when_optional_partial_parameter_absent_then_binds_empty_string() {
    let template = compile("/:id?.json");

    assert_eq!(param(&template.extract("/.json"), "id"), Some(""));
    assert_eq!(param(&template.extract("/42.json"), "id"), Some("42"));
}

#[test]
fn extract_when_several_unnamed_groups_then_keys_follow_group_order() {
    let template = compile(":scheme://:hostname/:path*/(\\d+)/(.*).png");
    let params = template.extract("https://www.github.com/gjeck/path-template/123/cool.png");

    assert_eq!(params.len(), 5);
    assert_eq!(param(&params, "scheme"), Some("https"));
    assert_eq!(param(&params, "hostname"), Some("www.github.com"));
    assert_eq!(param(&params, "path"), Some("gjeck/path-template"));
    assert_eq!(param(&params, "0"), Some("123"));
    assert_eq!(param(&params, "1"), Some("cool"));
}

#[test]
fn extract_when_case_sensitive_then_mismatched_case_yields_nothing() {
    let options = TemplateOptions::builder()
        .case_sensitive(true)
        .build()
        .expect("options should build");
    let template = PathTemplate::with_options("/User/(\\d+)/settings", options)
        .expect("template should compile");

    assert!(template.extract("/user/123/settings").is_empty());
    let params = template.extract("/User/123/settings");
    assert_eq!(params.len(), 1);
    assert_eq!(param(&params, "0"), Some("123"));
}

#[test]
fn extract_when_trailing_delimiter_present_then_still_matches() {
    let template = compile("/users/:id");
    assert_eq!(param(&template.extract("/users/7/"), "id"), Some("7"));
}

#[test]
fn extract_when_prefix_mode_then_ignores_remaining_segments() {
    let options = TemplateOptions::builder()
        .match_end(false)
        .build()
        .expect("options should build");
    let template =
        PathTemplate::with_options("/user/:id", options).expect("template should compile");

    assert_eq!(param(&template.extract("/user/42/posts"), "id"), Some("42"));
    assert_eq!(param(&template.extract("/user/42"), "id"), Some("42"));
}

#[test]
fn extract_when_values_percent_encoded_then_decoded_variant_decodes() {
    let template = compile("/search/:query");

    assert_eq!(
        param(&template.extract("/search/caf%C3%A9%20au%20lait"), "query"),
        Some("caf%C3%A9%20au%20lait")
    );
    assert_eq!(
        param(&template.extract_decoded("/search/caf%C3%A9%20au%20lait"), "query"),
        Some("café au lait")
    );
}

#[test]
fn extract_when_unicode_path_then_returns_unicode_value() {
    let template = compile("/🤖/:robot");
    assert_eq!(param(&template.extract("/🤖/ロボット"), "robot"), Some("ロボット"));
}
