use super::*;

#[test]
fn elements_serialize_with_indentation_and_inline_text() {
    let doc = Document {
        nodes: vec![
            Node::Doctype,
            Element::new("html")
                .attr("lang", "en")
                .child(
                    Element::new("head")
                        .child(Element::new("meta").attr("charset", "utf-8"))
                        .child(Element::new("title").text("Hi")),
                )
                .child(Element::new("body").child(Element::new("a-scene").flag("embedded")))
                .into(),
        ],
    };
    let expected = [
        "<!DOCTYPE html>",
        "<html lang=\"en\">",
        "  <head>",
        "    <meta charset=\"utf-8\">",
        "    <title>Hi</title>",
        "  </head>",
        "  <body>",
        "    <a-scene embedded></a-scene>",
        "  </body>",
        "</html>",
        "",
    ]
    .join("\n");
    assert_eq!(doc.to_html(), expected);
}

#[test]
fn attributes_and_text_are_escaped() {
    let doc = Document {
        nodes: vec![
            Element::new("p")
                .attr("title", "a \"quoted\" <tag> & more")
                .text("1 < 2 & 3 > 2")
                .into(),
        ],
    };
    assert_eq!(
        doc.to_html(),
        "<p title=\"a &quot;quoted&quot; &lt;tag&gt; &amp; more\">1 &lt; 2 &amp; 3 &gt; 2</p>\n"
    );
}

#[test]
fn raw_bodies_are_verbatim_and_indented() {
    let doc = Document {
        nodes: vec![Element::new("script").raw("if (a < b) {\n  go();\n}\n").into()],
    };
    assert_eq!(
        doc.to_html(),
        "<script>\n  if (a < b) {\n    go();\n  }\n</script>\n"
    );
}

#[test]
fn find_all_walks_in_document_order() {
    let doc = Document {
        nodes: vec![
            Element::new("html")
                .child(
                    Element::new("body")
                        .child(Element::new("a-entity").attr("n", "1"))
                        .child(
                            Element::new("div")
                                .child(Element::new("a-entity").attr("n", "2")),
                        ),
                )
                .into(),
        ],
    };
    let found = doc.find_all(|e| e.tag == "a-entity");
    assert_eq!(
        found.iter().filter_map(|e| e.get_attr("n")).collect::<Vec<_>>(),
        vec!["1", "2"]
    );
    assert_eq!(doc.root().map(|r| r.tag.as_str()), Some("html"));
}
