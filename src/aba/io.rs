use crate::aba::framework::RawFramework;
use crate::aba::report::FrameworkReport;
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read, Write};

/// A reader for text-encoded ABA+ frameworks.
///
/// The format follows the ICCMA line-oriented conventions. Atoms are given by
/// the indexes `1` to `n`, where `n` comes from the preamble; the returned
/// [`RawFramework`] uses the decimal form of each index as its label. The
/// following content defines a framework with eight atoms, where 1, 2 and 3
/// are assumptions, 6, 7 and 8 are their respective contraries, the rules are
/// (4 &#8592; 5, 1), (5 &#8592;) and (6 &#8592; 2, 3), and assumption 1 is
/// preferred to the other two:
///
/// ```text
/// p aba 8
/// # this is a comment
/// a 1
/// a 2
/// a 3
/// c 1 6
/// c 2 7
/// c 3 8
/// r 4 5 1
/// r 5
/// r 6 2 3
/// t 1 0
/// t 2 1
/// t 3 1
/// ```
///
/// Only the line-level syntax is checked here; the well-formedness of the
/// framework itself is the business of
/// [`ABAFramework::build_and_validate`](crate::aba::ABAFramework::build_and_validate).
#[derive(Default)]
pub struct ABAPlusReader;

impl ABAPlusReader {
    /// Reads a raw framework from a text source.
    pub fn read(&self, reader: &mut dyn Read) -> Result<RawFramework<String>> {
        let br = BufReader::new(reader);
        let mut raw: Option<RawFramework<String>> = None;
        let mut n_atoms = 0;
        let mut found_empty_lines = false;
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = line.with_context(context)?;
            if l.trim_start().starts_with('#') {
                continue;
            }
            if l.trim().is_empty() {
                found_empty_lines = true;
                continue;
            }
            if found_empty_lines {
                return Err(anyhow!("got content after an empty line")).with_context(context);
            }
            let words = l.split_whitespace().collect::<Vec<&str>>();
            if raw.is_none() {
                n_atoms = read_preamble(&words).with_context(context)?;
                raw = Some(RawFramework {
                    literals: (1..=n_atoms).map(|i| i.to_string()).collect(),
                    ..Default::default()
                });
                continue;
            }
            let read_atom = |word: &str| match word.parse::<isize>() {
                Ok(n) if n >= 1 && (n as usize) <= n_atoms => Ok(n.to_string()),
                _ => Err(anyhow!(r#"invalid atom index "{word}""#)),
            };
            let expect_n_words = |first, expected| {
                if expected != words.len() {
                    Err(anyhow!(
                        r#"wrong number of words for a "{first}" line; expected {expected}, got {}"#,
                        words.len()
                    ))
                    .with_context(context)
                } else {
                    Ok(())
                }
            };
            let raw = raw.as_mut().unwrap();
            match words[0] {
                "a" => {
                    expect_n_words("a", 2)?;
                    raw.assumptions.push(read_atom(words[1])?);
                }
                "c" => {
                    expect_n_words("c", 3)?;
                    raw.contraries
                        .push((read_atom(words[1])?, read_atom(words[2])?));
                }
                "r" => {
                    if words.len() == 1 {
                        return Err(anyhow!(
                            r#"wrong number of words for a "r" line; expected at least 2, got {}"#,
                            words.len()
                        ))
                        .with_context(context);
                    }
                    let head = read_atom(words[1])?;
                    let body = words
                        .iter()
                        .skip(2)
                        .map(|w| read_atom(w))
                        .collect::<Result<Vec<_>>>()?;
                    raw.rules.push((head, body));
                }
                "t" => {
                    expect_n_words("t", 3)?;
                    let assumption = read_atom(words[1])?;
                    let rank = match words[2].parse::<isize>() {
                        Ok(n) if n >= 0 => n as usize,
                        _ => {
                            return Err(anyhow!(r#"invalid rank "{}""#, words[2]))
                                .with_context(context)
                        }
                    };
                    raw.preferences.push((assumption, rank));
                }
                _ => {
                    return Err(anyhow!(r#"unexpected first word "{}""#, words[0]))
                        .with_context(context)
                }
            }
        }
        raw.ok_or_else(|| anyhow!("missing preamble"))
    }
}

fn read_preamble(words: &[&str]) -> Result<usize> {
    if words.len() != 3 {
        return Err(anyhow!(
            "error in preamble; expected 3 words, got {}",
            words.len()
        ));
    }
    if words[0] != "p" {
        return Err(anyhow!(
            r#"error in first word of preamble; expected "p", got "{}""#,
            words[0]
        ));
    }
    if words[1] != "aba" {
        return Err(anyhow!(
            r#"error in second word of preamble; expected "aba", got "{}""#,
            words[1]
        ));
    }
    match words[2].parse::<isize>() {
        Ok(n) if n >= 0 => Ok(n as usize),
        _ => Err(anyhow!("error in preamble: invalid number of atoms")),
    }
}

/// A text writer for the products of a reasoning run.
///
/// The counterpart of the JSON serialization of [`FrameworkReport`], for the
/// human-readable default output of the command line app.
#[derive(Default)]
pub struct ResultsWriter;

impl ResultsWriter {
    /// Writes the arguments, one per line.
    pub fn write_arguments(&self, report: &FrameworkReport, out: &mut dyn Write) -> Result<()> {
        let context = "while writing the arguments";
        for arg in &report.arguments {
            writeln!(
                out,
                "{}: {} <- {{{}}}",
                arg.id,
                arg.conclusion,
                arg.assumptions.join(", ")
            )
            .context(context)?;
        }
        Ok(())
    }

    /// Writes the pairwise attacks, one per line.
    pub fn write_attacks(&self, report: &FrameworkReport, out: &mut dyn Write) -> Result<()> {
        let context = "while writing the attacks";
        for att in &report.attacks {
            writeln!(
                out,
                "{} -> {} [{}] witness {}",
                att.attacker, att.target, att.kind, att.witness
            )
            .context(context)?;
        }
        Ok(())
    }

    /// Writes the coalition attacks, one per line.
    pub fn write_coalition_attacks(
        &self,
        report: &FrameworkReport,
        out: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing the coalition attacks";
        if let Some(coalition_attacks) = &report.coalition_attacks {
            for att in coalition_attacks {
                writeln!(
                    out,
                    "{{{}}} => {{{}}} [{}] witness {}",
                    att.x.join(", "),
                    att.y.join(", "),
                    att.kind,
                    att.witness
                )
                .context(context)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aba::report::{ArgumentReport, AttackReport, CoalitionAttackReport};

    #[test]
    fn test_read_ok() {
        let instance = r#"p aba 8
        # a comment
        a 1
        a 2
        a 3
        c 1 6
        c 2 7
        c 3 8
        r 4 5 1
        r 5
        r 6 2 3
        t 1 0
        t 2 1
        "#;
        let raw = ABAPlusReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(8, raw.literals.len());
        assert_eq!(
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
            raw.assumptions
        );
        assert_eq!(("1".to_string(), "6".to_string()), raw.contraries[0]);
        assert_eq!(
            ("4".to_string(), vec!["5".to_string(), "1".to_string()]),
            raw.rules[0]
        );
        assert_eq!(("5".to_string(), vec![]), raw.rules[1]);
        assert_eq!(
            vec![("1".to_string(), 0), ("2".to_string(), 1)],
            raw.preferences
        );
    }

    #[test]
    fn test_indented_comment_line() {
        let instance = "p aba 2\n  # comment with leading whitespace\na 1\nc 1 2\n";
        let raw = ABAPlusReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(vec!["1".to_string()], raw.assumptions);
    }

    #[test]
    fn test_missing_preamble() {
        assert!(ABAPlusReader::default().read(&mut "a 1".as_bytes()).is_err());
        assert!(ABAPlusReader::default().read(&mut "".as_bytes()).is_err());
    }

    #[test]
    fn test_wrong_preamble() {
        assert!(ABAPlusReader::default()
            .read(&mut "p af 3".as_bytes())
            .is_err());
        assert!(ABAPlusReader::default()
            .read(&mut "p aba -1".as_bytes())
            .is_err());
        assert!(ABAPlusReader::default()
            .read(&mut "p aba".as_bytes())
            .is_err());
    }

    #[test]
    fn test_atom_index_out_of_range() {
        let instance = "p aba 2\na 3\n";
        assert!(ABAPlusReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_content_after_empty_line() {
        let instance = "p aba 2\na 1\n\na 2\n";
        assert!(ABAPlusReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_invalid_rank() {
        let instance = "p aba 2\na 1\nt 1 x\n";
        assert!(ABAPlusReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
        let instance = "p aba 2\na 1\nt 1 -1\n";
        assert!(ABAPlusReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_unexpected_word() {
        let instance = "p aba 2\nz 1\n";
        assert!(ABAPlusReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    fn empty_report() -> FrameworkReport {
        FrameworkReport {
            literals: vec![],
            assumptions: vec![],
            contraries: Default::default(),
            rules: vec![],
            preferences: Default::default(),
            arguments: vec![],
            attacks: vec![],
            coalition_attacks: None,
        }
    }

    #[test]
    fn test_write_arguments() {
        let mut report = empty_report();
        report.arguments.push(ArgumentReport {
            id: 0,
            conclusion: "q".to_string(),
            assumptions: vec![],
        });
        report.arguments.push(ArgumentReport {
            id: 1,
            conclusion: "p".to_string(),
            assumptions: vec!["a".to_string(), "b".to_string()],
        });
        let mut out = Vec::new();
        ResultsWriter::default()
            .write_arguments(&report, &mut out)
            .unwrap();
        assert_eq!(
            "0: q <- {}\n1: p <- {a, b}\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn test_write_attacks() {
        let mut report = empty_report();
        report.attacks.push(AttackReport {
            attacker: 0,
            target: 1,
            kind: "normal".to_string(),
            witness: "b".to_string(),
        });
        let mut out = Vec::new();
        ResultsWriter::default()
            .write_attacks(&report, &mut out)
            .unwrap();
        assert_eq!(
            "0 -> 1 [normal] witness b\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn test_write_coalition_attacks() {
        let mut report = empty_report();
        report.coalition_attacks = Some(vec![CoalitionAttackReport {
            x: vec!["a".to_string()],
            y: vec!["b".to_string()],
            kind: "both".to_string(),
            witness: "b".to_string(),
        }]);
        let mut out = Vec::new();
        ResultsWriter::default()
            .write_coalition_attacks(&report, &mut out)
            .unwrap();
        assert_eq!(
            "{a} => {b} [both] witness b\n",
            String::from_utf8(out).unwrap()
        );
    }
}
