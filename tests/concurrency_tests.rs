//! Parsing is re-entrant: independent parses share no state, so running
//! them on a thread pool yields exactly the sequential results.

use esz::{ParseOptions, Program, parse};
use rayon::prelude::*;

fn source_for(i: usize) -> String {
    format!(
        "function f{i}(a, b = {i}) {{\n  const [x, ...rest] = a;\n  return `${{x}}:{i}` + rest.length * b;\n}}\n\
         class C{i} {{ #v = {i}; get v() {{ return this.#v; }} }}\n\
         f{i}([1, 2, 3]) ?? new C{i}().v;\n"
    )
}

fn parse_program(source: &str) -> Program {
    match parse(source, ParseOptions::default().with_tokens(true)) {
        Ok(output) => output.program,
        Err(err) => panic!("parse failed: {err}"),
    }
}

#[test]
fn test_parallel_parses_match_sequential() {
    let sources: Vec<String> = (0..64).map(source_for).collect();

    let sequential: Vec<Program> = sources.iter().map(|s| parse_program(s)).collect();
    let parallel: Vec<Program> = sources.par_iter().map(|s| parse_program(s)).collect();

    assert_eq!(sequential.len(), parallel.len());
    for (i, (expected, actual)) in sequential.iter().zip(&parallel).enumerate() {
        assert_eq!(expected, actual, "program {i} differs");
    }
}

#[test]
fn test_repeated_parses_are_deterministic() {
    let source = source_for(7);
    let first = serde_json::to_string(&parse_program(&source)).expect("serializable");
    for _ in 0..8 {
        let again = serde_json::to_string(&parse_program(&source)).expect("serializable");
        assert_eq!(first, again);
    }
}

#[test]
fn test_parallel_errors_are_independent() {
    let results: Vec<Result<usize, u32>> = (0..32)
        .into_par_iter()
        .map(|i| {
            let source = if i % 2 == 0 { format!("var v{i} = {i};") } else { format!("var v{i} = ;") };
            parse(source, ParseOptions::default())
                .map(|output| output.program.body.len())
                .map_err(|err| err.line_number)
        })
        .collect();

    for (i, result) in results.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(result, &Ok(1));
        } else {
            assert_eq!(result, &Err(1));
        }
    }
}
