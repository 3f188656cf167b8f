use path_template_rs::{PathTemplate, TemplateOptions, params};
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::thread;

fn hash_of(template: &PathTemplate) -> u64 {
    let mut hasher = DefaultHasher::new();
    template.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn path_template_when_parsed_from_str_then_keeps_template_text() {
    let parsed: PathTemplate = "/artist/:artistId".parse().expect("template should parse");
    assert_eq!(parsed.template(), "/artist/:artistId");

    let converted = PathTemplate::try_from("//:robot").expect("template should convert");
    assert_eq!(converted.template(), "//:robot");

    let owned = PathTemplate::try_from(String::from("/a/:b")).expect("template should convert");
    assert_eq!(owned.template(), "/a/:b");
}

#[test]
fn path_template_when_displayed_then_prints_template_text() {
    let template = PathTemplate::new("/user/:id(\\d+)").expect("template should compile");
    assert_eq!(template.to_string(), "/user/:id(\\d+)");
    assert_eq!(format!("{template}"), "/user/:id(\\d+)");
}

#[test]
fn path_template_when_same_text_and_options_then_equal_with_same_hash() {
    let first = PathTemplate::new("/user/:id").expect("template should compile");
    let second = PathTemplate::new("/user/:id").expect("template should compile");

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[test]
fn path_template_when_text_differs_then_not_equal() {
    let first = PathTemplate::new("/user/:id").expect("template should compile");
    let second = PathTemplate::new("/user/:userId").expect("template should compile");

    assert_ne!(first, second);
}

#[test]
fn path_template_when_options_differ_then_not_equal() {
    let options = TemplateOptions::builder()
        .strict(true)
        .build()
        .expect("options should build");
    let loose = PathTemplate::new("/user/:id").expect("template should compile");
    let strict = PathTemplate::with_options("/user/:id", options).expect("template should compile");

    assert_ne!(loose, strict);
    assert!(strict.options().strict);
}

#[test]
fn path_template_when_collected_into_set_then_duplicates_collapse() {
    let set: HashSet<PathTemplate> = ["/a/:b", "/a/:b", "/c"]
        .into_iter()
        .map(|text| PathTemplate::new(text).expect("template should compile"))
        .collect();

    assert_eq!(set.len(), 2);
    assert!(set.contains(&PathTemplate::new("/c").expect("template should compile")));
}

#[test]
fn path_template_when_compiled_twice_then_artifacts_are_identical() {
    let template = ":scheme://:hostname/:path*/(\\d+)/(.*).png";
    let first = PathTemplate::new(template).expect("template should compile");
    let second = PathTemplate::new(template).expect("template should compile");

    assert_eq!(first.tokens(), second.tokens());
    assert_eq!(first.keys(), second.keys());
    assert_eq!(first.regex().as_str(), second.regex().as_str());
    assert_eq!(first.parameter_names(), second.parameter_names());
}

#[test]
fn path_template_when_parameters_declared_then_names_follow_declaration_order() {
    let template = PathTemplate::new(":scheme://:userInfo@:host:port?//:setting([abc])")
        .expect("template should compile");
    assert_eq!(
        template.parameter_names(),
        ["scheme", "userInfo", "host", "port", "setting"]
    );

    let literal = PathTemplate::new("/about").expect("template should compile");
    assert!(literal.parameter_names().is_empty());
}

#[test]
fn path_template_when_shared_across_threads_then_results_agree() {
    let template = Arc::new(PathTemplate::new("/user/:id").expect("template should compile"));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let template = Arc::clone(&template);
            thread::spawn(move || {
                let path = template
                    .expand(&params! { "id" => index })
                    .expect("expansion should succeed");
                let extracted = template.extract(&path);
                (path, extracted["id"].clone())
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let (path, id) = handle.join().expect("worker should finish");
        assert_eq!(path, format!("/user/{index}"));
        assert_eq!(id, index.to_string());
    }
}

#[test]
fn path_template_when_cloned_then_behaves_identically() {
    let template = PathTemplate::new("/user/:ids+").expect("template should compile");
    let cloned = template.clone();

    assert_eq!(template, cloned);
    assert_eq!(
        cloned.expand(&params! { "ids" => ["1", "2"] }).as_deref(),
        Some("/user/1/2")
    );
    assert_eq!(cloned.expand(&params! {}), None);
}
