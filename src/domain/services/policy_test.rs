use super::Directive;
use super::NestPolicy;

#[test]
fn it_nests_from_level_zero() {
    let decision = NestPolicy::decide(0);

    assert_eq!(decision.directive, Directive::Nest);
    assert_eq!(decision.next_level, 1);
}

#[test]
fn it_nests_from_level_one() {
    let decision = NestPolicy::decide(1);

    assert_eq!(decision.directive, Directive::Nest);
    assert_eq!(decision.next_level, 2);
}

#[test]
fn it_branches_from_level_two() {
    let decision = NestPolicy::decide(2);

    assert_eq!(decision.directive, Directive::Branch);
    assert_eq!(decision.next_level, 0);
}

#[test]
fn it_renders_nest_directive_text() {
    let decision = NestPolicy::decide(1);

    assert_eq!(
        decision.text("garbage collection"),
        "Nest deeper on 'garbage collection' (current level 2)."
    );
}

#[test]
fn it_renders_branch_directive_text() {
    let decision = NestPolicy::decide(2);

    assert_eq!(
        decision.text("concurrency"),
        "Branch to new topic 'concurrency' (reset to level 0)."
    );
}
