use crate::aba::framework::ABAFramework;
use crate::utils::LabelType;

/// Checks whether the rules of a framework form a dependency cycle.
///
/// The dependency graph has an edge from each body literal of a rule to the
/// head of this rule. The check is a depth-first traversal with an explicit
/// stack; a literal reached while it is still on the current traversal path
/// closes a cycle. Self-loops count as cycles.
pub fn has_rule_cycles<T>(framework: &ABAFramework<T>) -> bool
where
    T: LabelType,
{
    let n = framework.language().len();
    let mut successors = vec![Vec::new(); n];
    for rule in framework.iter_rules() {
        for b in rule.body_ids() {
            successors[*b].push(rule.head_id());
        }
    }
    enum Step {
        Enter(usize),
        Leave(usize),
    }
    let mut visited = vec![false; n];
    let mut in_path = vec![false; n];
    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut stack = vec![Step::Enter(start)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(v) => {
                    if in_path[v] {
                        return true;
                    }
                    if visited[v] {
                        continue;
                    }
                    visited[v] = true;
                    in_path[v] = true;
                    stack.push(Step::Leave(v));
                    for &w in &successors[v] {
                        if in_path[w] {
                            return true;
                        }
                        if !visited[w] {
                            stack.push(Step::Enter(w));
                        }
                    }
                }
                Step::Leave(v) => in_path[v] = false,
            }
        }
    }
    false
}
