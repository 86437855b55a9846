use log::trace;

use super::restriction::parse_restriction;
use super::Directive;
use super::DirectiveError;
use super::Spanned;
use crate::relations::Relation;

/// Parses every directive in `source`, in the order of the lines.
///
/// Parsing stops at the first malformed line.
pub fn parse_directives(source: &str) -> Result<Vec<Spanned<Directive>>, DirectiveError> {
    let mut directives = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line = index + 1;
        let content = strip_comment(raw_line).trim();
        if content.is_empty() {
            continue;
        }

        let directive = parse_line(content, line)?;
        trace!("line {line}: {directive:?}");
        directives.push(Spanned {
            value: directive,
            line,
        });
    }

    Ok(directives)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(content, _)| content)
}

fn parse_line(content: &str, line: usize) -> Result<Directive, DirectiveError> {
    let Some((keyword, rest)) = content.split_once(',') else {
        let reason = format!("expected '<keyword>, ...', found '{content}'");
        return Err(DirectiveError::malformed(reason, line));
    };
    let tokens = rest.split_whitespace().collect::<Vec<_>>();

    match keyword.trim() {
        "task" => parse_task(&tokens, line),
        "domain" => parse_domain(&tokens, line),
        "constraint" => parse_constraint(&tokens, line),
        other => {
            let reason = format!("unknown keyword '{other}'");
            Err(DirectiveError::malformed(reason, line))
        }
    }
}

fn parse_task(tokens: &[&str], line: usize) -> Result<Directive, DirectiveError> {
    let [name, duration] = tokens else {
        let reason = "a task needs a name and a duration";
        return Err(DirectiveError::malformed(reason, line));
    };

    let duration = duration
        .parse::<u16>()
        .ok()
        .filter(|&duration| duration > 0)
        .ok_or_else(|| DirectiveError::InvalidDuration {
            value: (*duration).to_owned(),
            line,
        })?;

    Ok(Directive::Task {
        name: (*name).to_owned(),
        duration,
    })
}

fn parse_domain(tokens: &[&str], line: usize) -> Result<Directive, DirectiveError> {
    let Some((name, restriction)) = tokens.split_first() else {
        let reason = "a domain needs a task name and a restriction";
        return Err(DirectiveError::malformed(reason, line));
    };

    Ok(Directive::Domain {
        name: (*name).to_owned(),
        restriction: parse_restriction(restriction, line)?,
    })
}

fn parse_constraint(tokens: &[&str], line: usize) -> Result<Directive, DirectiveError> {
    let [first, relation, second] = tokens else {
        let reason = "a constraint needs two task names and a relation";
        return Err(DirectiveError::malformed(reason, line));
    };

    let relation = relation
        .parse::<Relation>()
        .map_err(|_| DirectiveError::UnknownRelation {
            relation: (*relation).to_owned(),
            line,
        })?;

    Ok(Directive::Constraint {
        first: (*first).to_owned(),
        relation,
        second: (*second).to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::Restriction;
    use crate::timeslot::Weekday;

    #[test]
    fn comments_and_whitespace_are_ignored() {
        let source = "# a meeting\n\n   task,   meet    2   # two hours\n\t\ndomain, meet  wed\n";

        let directives = parse_directives(source).unwrap();

        assert_eq!(
            directives,
            vec![
                Spanned {
                    value: Directive::Task {
                        name: "meet".to_owned(),
                        duration: 2
                    },
                    line: 3
                },
                Spanned {
                    value: Directive::Domain {
                        name: "meet".to_owned(),
                        restriction: Restriction::OnDay(Weekday::Wed)
                    },
                    line: 5
                },
            ]
        );
    }

    #[test]
    fn constraint_directive() {
        let directives = parse_directives("constraint, a same-day b").unwrap();

        assert_eq!(
            directives[0].value,
            Directive::Constraint {
                first: "a".to_owned(),
                relation: Relation::SameDay,
                second: "b".to_owned()
            }
        );
    }

    #[test]
    fn errors_carry_the_line_number() {
        let error = parse_directives("task, a 1\n\nconstraint, a overlaps b").unwrap_err();

        assert_eq!(
            error,
            DirectiveError::UnknownRelation {
                relation: "overlaps".to_owned(),
                line: 3
            }
        );
        assert_eq!(error.line(), 3);
    }

    #[test]
    fn durations_must_be_positive_integers() {
        for source in ["task, a 0", "task, a 1.5", "task, a -2", "task, a two"] {
            assert!(matches!(
                parse_directives(source),
                Err(DirectiveError::InvalidDuration { line: 1, .. })
            ));
        }
    }

    #[test]
    fn malformed_lines() {
        for source in [
            "task a 1",
            "job, a 1",
            "task, a",
            "constraint, a before",
            "domain, a",
        ] {
            assert!(
                matches!(
                    parse_directives(source),
                    Err(DirectiveError::MalformedDirective { line: 1, .. })
                ),
                "{source} should be malformed"
            );
        }
    }
}
