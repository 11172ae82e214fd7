// tests/selector.rs
//
// Structured selector compilation.
//
use html_harvest::{compile, Sel};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("div")]
#[case("  p   > span ")]
#[case("")]
#[case("a[href='x y']:first-child")]
fn raw_strings_are_idempotent(#[case] raw: &str) {
    let once = compile(&Sel::from(raw));
    assert_eq!(once, raw);
    assert_eq!(compile(&Sel::from(once.clone())), once);
}

#[test]
fn attribute_pairs() {
    assert_eq!(compile(&Sel::list([Sel::attr("id", "x")])), "[id='x']");
    assert_eq!(compile(&Sel::list([Sel::attr("test_role", "login")])), "[test-role='login']");
    assert_eq!(compile(&Sel::list([Sel::attr("checked", true)])), "[checked]");
    assert_eq!(compile(&Sel::list([Sel::attr("checked", false)])), "");
}

#[test]
fn attributes_attach_without_space() {
    let sel = Sel::list([Sel::attr("id", "x"), Sel::attr("class", "y")]);
    assert_eq!(compile(&sel), "[id='x'][class='y']");
}

#[test]
fn element_with_nested_attrs() {
    let sel = Sel::list([Sel::element("p", [Sel::attr("id", "x"), Sel::attr("class", "y")])]);
    assert_eq!(compile(&sel), "p[id='x'][class='y']");
    assert_eq!(Sel::element("input", [Sel::attr("name", "q")]).compile(), "input[name='q']");
}

#[test]
fn tags_join_as_descendants() {
    let show_disabled = false;
    let sel = Sel::list([
        Sel::tag("form"),
        Sel::attr("id", "login"),
        Sel::tag("input"),
        Sel::attr("disabled", show_disabled),
    ]);
    assert_eq!(compile(&sel), "form[id='login'] input");
}

#[test]
fn deep_nesting() {
    let sel = Sel::list([
        Sel::tag("table"),
        Sel::list([Sel::element(
            "tr",
            [Sel::attr("class", "row"), Sel::element("td", [Sel::attr("data_col", "2")])],
        )]),
    ]);
    assert_eq!(compile(&sel), "table tr[class='row'] td[data-col='2']");

    // structured output fed back in as a raw string is left alone
    let css = compile(&sel);
    assert_eq!(compile(&Sel::from(&css)), css);
}

#[test]
fn display_matches_compile() {
    let sel = Sel::list([Sel::tag("ul"), Sel::element("li", [Sel::attr("hidden", true)])]);
    assert_eq!(sel.to_string(), "ul li[hidden]");
    assert_eq!(Sel::tag("section").to_string(), "section");
}
