//! Checks the shape of every escape sequence the encoder writes.
//!
//! The output is fed through a real VT parser: every CSI sequence must be
//! an SGR (`m`) with either the single parameter 0 or exactly two
//! parameters `<style>;<color>`.

use disco::{apply_rainbow, apply_style, encode, StyleCode, StyleNode, Template};
use vte::{Params, Parser, Perform};

#[derive(Default)]
struct SgrCollector {
    text: String,
    sequences: Vec<Vec<u16>>,
    other_csi: Vec<char>,
}

impl Perform for SgrCollector {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        if byte == b'\n' {
            self.text.push('\n');
        }
    }

    fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        if action != 'm' {
            self.other_csi.push(action);
            return;
        }
        self.sequences.push(
            params
                .iter()
                .map(|p| p.first().copied().unwrap_or(0))
                .collect(),
        );
    }
}

fn parse(encoded: &str) -> SgrCollector {
    let mut collector = SgrCollector::default();
    let mut parser = Parser::new();
    parser.advance(&mut collector, encoded.as_bytes());
    collector
}

fn assert_shape(seq: &[u16]) {
    match seq {
        [0] => {}
        [style, color] => {
            assert!(
                matches!(style, 0 | 1 | 2 | 4),
                "unexpected style parameter in {:?}",
                seq
            );
            assert!(
                *color == 2 || (30..=37).contains(color) || (40..=47).contains(color),
                "unexpected color parameter in {:?}",
                seq
            );
        }
        _ => panic!("unexpected SGR sequence {:?}", seq),
    }
}

fn busy_document() -> Vec<StyleNode> {
    let mut nodes = Template::Colored.nodes();
    nodes = apply_style(&nodes, 0..20, StyleCode(42)).unwrap();
    nodes = apply_style(&nodes, 5..12, StyleCode::BOLD).unwrap();
    nodes = apply_style(&nodes, 8..30, StyleCode::UNDERLINE).unwrap();
    nodes = apply_rainbow(&nodes, 25..40).unwrap();
    apply_style(&nodes, 15..18, StyleCode::RESET).unwrap()
}

#[test]
fn every_sequence_is_well_formed() {
    let collector = parse(&encode(&busy_document()));
    assert!(collector.other_csi.is_empty());
    assert!(!collector.sequences.is_empty());
    for seq in &collector.sequences {
        assert_shape(seq);
    }
}

#[test]
fn parsed_text_matches_document() {
    let nodes = busy_document();
    let collector = parse(&encode(&nodes));
    assert_eq!(collector.text, disco::style::node::plain_text(&nodes));
}

#[test]
fn every_span_closes_with_reset() {
    let nodes = Template::Colored.nodes();
    let collector = parse(&encode(&nodes));
    let resets = collector
        .sequences
        .iter()
        .filter(|s| s.as_slice() == [0])
        .count();
    // One per span: Discord, the blurple background and the white inside
    // it, four letters of "Text" and ten of "Generator!".
    assert_eq!(resets, 1 + 2 + 4 + 10);
}

#[test]
fn multiline_text_survives_parsing() {
    let nodes = Template::Rules.nodes();
    let nodes = apply_style(&nodes, 0..13, StyleCode(33)).unwrap();
    let collector = parse(&encode(&nodes));
    assert_eq!(
        collector.text,
        "SERVER RULES:\n1. Be respectful\n2. No spamming\n3. Have fun!"
    );
    assert_eq!(collector.sequences, vec![vec![2, 33], vec![0]]);
}
