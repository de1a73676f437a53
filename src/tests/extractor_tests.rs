use crate::implementations::code_extractor::{ extract, extract_hdl_code, ExtractionRule };

#[test]
fn tagged_block_is_extracted() {
    let response = "Here is the design:\n```verilog\nmodule top;\nendmodule\n```\nLet me know!";

    let extraction = extract(response);

    assert_eq!(extraction.code, "module top;\nendmodule");
    assert_eq!(extraction.rule, ExtractionRule::TaggedFence);
}

#[test]
fn tag_is_case_insensitive() {
    let response = "```Verilog\nmodule top;\nendmodule\n```";
    assert_eq!(extract(response).rule, ExtractionRule::TaggedFence);

    let response = "```SystemVerilog\nmodule top;\nendmodule\n```";
    assert_eq!(extract(response).code, "module top;\nendmodule");
}

#[test]
fn tagged_block_wins_over_earlier_untagged_block() {
    let response = "\
First a sketch:
```
module sketch;
endmodule
```
And the real thing:
```verilog
module real_design;
endmodule
```";

    let extraction = extract(response);

    assert_eq!(extraction.code, "module real_design;\nendmodule");
    assert_eq!(extraction.rule, ExtractionRule::TaggedFence);
}

#[test]
fn first_tagged_block_wins() {
    let response = "```verilog\nmodule a;\nendmodule\n```\n```verilog\nmodule b;\nendmodule\n```";
    assert_eq!(extract_hdl_code(response), "module a;\nendmodule");
}

#[test]
fn untagged_block_needs_a_module() {
    let response = "\
Run it with:
```
iverilog -o out.vvp adder.v
```
Code:
```
module adder;
endmodule
```";

    let extraction = extract(response);

    assert_eq!(extraction.code, "module adder;\nendmodule");
    assert_eq!(extraction.rule, ExtractionRule::UntaggedFence);
}

#[test]
fn unfenced_response_falls_back_to_trimmed_text() {
    let response = "\n  module adder(input a, output b);\n  assign b = a;\nendmodule  \n\n";

    let extraction = extract(response);

    assert_eq!(extraction.code, "module adder(input a, output b);\n  assign b = a;\nendmodule");
    assert_eq!(extraction.rule, ExtractionRule::WholeText);
}

#[test]
fn untagged_block_without_module_falls_back() {
    let response = "Try:\n```\nmake sim\n```";

    let extraction = extract(response);

    assert_eq!(extraction.rule, ExtractionRule::WholeText);
    assert_eq!(extraction.code, response);
}

#[test]
fn empty_response_yields_empty_code() {
    let extraction = extract("   \n");
    assert!(extraction.code.is_empty());
    assert_eq!(extraction.rule, ExtractionRule::WholeText);
}

#[test]
fn extraction_is_idempotent() {
    let responses = [
        "```verilog\nmodule top;\nendmodule\n```",
        "```\nmodule top;\nendmodule\n```",
        "  module top; endmodule  ",
        "I cannot help with that.",
        "",
    ];

    for response in responses {
        let once = extract_hdl_code(response);
        assert_eq!(extract_hdl_code(&once), once, "not idempotent for {:?}", response);
    }
}
