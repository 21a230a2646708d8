// tests/scenarios.rs
use glam::Vec2;
use lsystem_turtle::{
    DrawingSurface, LSystemError, RecordingSurface, Rule, SavedPoint, Symbol, SurfaceCall,
    TurtleConfig, TurtleInterpreter, TurtleState, expand, expand_rules,
};

const EPS: f32 = 1e-4;

fn interpreter(step: f32, angle: f32) -> TurtleInterpreter {
    TurtleInterpreter::new(TurtleConfig {
        step_length: step,
        turn_angle: angle,
        color_cycling: false,
    })
}

/// Feeds `sequence` one symbol at a time and records the state after each step.
fn walk(
    interpreter: &TurtleInterpreter,
    sequence: &str,
) -> (Vec<TurtleState>, Vec<SavedPoint>) {
    let mut state = TurtleState::default();
    let mut stack = Vec::new();
    let mut states = Vec::new();
    for c in sequence.chars() {
        let symbol = Symbol::try_from(c).unwrap();
        let (next, _) = interpreter.step(state, &mut stack, symbol).unwrap();
        state = next;
        states.push(state);
    }
    (states, stack)
}

#[test]
fn test_expand_two_levels() {
    assert_eq!(expand("a", &["a=a+a"], 1).unwrap(), "a+a");
    assert_eq!(expand("a", &["a=a+a"], 2).unwrap(), "a+a+a+a");
}

#[test]
fn test_expand_doubling() {
    let sequence = expand("a", &["a=aa"], 3).unwrap();
    assert_eq!(sequence.len(), 8);
    assert!(sequence.chars().all(|c| c == 'a'));
}

#[test]
fn test_zero_levels_ignores_rules() {
    // Even a malformed rule is never read at level 0.
    assert_eq!(expand("a[b]", &["a="], 0).unwrap(), "a[b]");
}

#[test]
fn test_rules_compose_in_order() {
    assert_eq!(expand("ab", &["a=b", "b=aa"], 1).unwrap(), "aaaa");
    assert_eq!(expand("ab", &["b=aa", "a=b"], 1).unwrap(), "bbb");
}

#[test]
fn test_empty_replacement_is_invalid() {
    let err = expand("a", &["a="], 1).unwrap_err();
    assert!(matches!(err, LSystemError::InvalidRule(ref r) if r == "a="));

    let err = expand("a", &["=a"], 1).unwrap_err();
    assert!(matches!(err, LSystemError::InvalidRule(_)));

    let err = expand("a", &["a=aa", "noequals"], 2).unwrap_err();
    assert!(matches!(err, LSystemError::InvalidRule(ref r) if r == "noequals"));
}

#[test]
fn test_rule_construction() {
    let rule = Rule::new("a", "ab").unwrap();
    assert_eq!(rule.apply("bab"), "babb");
    assert_eq!(Rule::parse("a=ab").unwrap(), rule);

    // Only the first `=` separates trigger from replacement.
    let rule = Rule::parse("a=b=c").unwrap();
    assert_eq!(rule.trigger, "a");
    assert_eq!(rule.replacement, "b=c");

    assert!(matches!(Rule::new("", "a"), Err(LSystemError::InvalidRule(ref r)) if r == "=a"));
    assert!(matches!(Rule::new("a", ""), Err(LSystemError::InvalidRule(ref r)) if r == "a="));
}

#[test]
fn test_expand_rules_matches_textual_expand() {
    let rules = [Rule::new("a", "a[+a]a").unwrap()];
    assert_eq!(
        expand_rules("a", &rules, 2),
        expand("a", &["a=a[+a]a"], 2).unwrap()
    );
}

#[test]
fn test_draw_turn_draw() {
    let interpreter = interpreter(10.0, 90.0);
    let (states, _) = walk(&interpreter, "a+a");

    assert!(states[0].position.abs_diff_eq(Vec2::new(10.0, 0.0), EPS));
    assert!((states[1].heading - 90.0).abs() < EPS);
    assert!(states[2].position.abs_diff_eq(Vec2::new(10.0, 10.0), EPS));

    let mut surface = RecordingSurface::new();
    let run = interpreter.interpret("a+a", &mut surface).unwrap();
    assert!(run.state.position.abs_diff_eq(Vec2::new(10.0, 10.0), EPS));
    assert!(surface.position().abs_diff_eq(run.state.position, EPS));
    assert_eq!(run.trace, "pd();fd(10)\nright(90)\npd();fd(10)\n");
}

#[test]
fn test_push_pop_restores_position() {
    let interpreter = interpreter(5.0, 90.0);
    let mut state = TurtleState::default();
    let mut stack = Vec::new();

    let (next, instruction) = interpreter.step(state, &mut stack, Symbol::Push).unwrap();
    state = next;
    assert!(instruction.is_none());
    assert_eq!(
        stack,
        vec![SavedPoint {
            position: Vec2::ZERO,
            heading: 0.0
        }]
    );

    let (next, _) = interpreter.step(state, &mut stack, Symbol::Draw).unwrap();
    state = next;
    assert!(state.position.abs_diff_eq(Vec2::new(5.0, 0.0), EPS));

    let (next, _) = interpreter.step(state, &mut stack, Symbol::Pop).unwrap();
    state = next;
    assert_eq!(state.position, Vec2::ZERO);
    assert_eq!(state.heading, 0.0);
    assert!(stack.is_empty());

    let (next, _) = interpreter.step(state, &mut stack, Symbol::Draw).unwrap();
    assert!(next.position.abs_diff_eq(Vec2::new(5.0, 0.0), EPS));
}

#[test]
fn test_branch_trace_and_surface_calls() {
    let interpreter = interpreter(5.0, 90.0);
    let mut surface = RecordingSurface::new();
    let run = interpreter.interpret("[a]a", &mut surface).unwrap();

    assert_eq!(
        run.trace,
        "pd();fd(5)\npu();goto(0.00,0.00);setheading(0)\npd();fd(5)\n"
    );
    assert_eq!(
        surface.calls,
        vec![
            SurfaceCall::PenDown,
            SurfaceCall::MoveForward(5.0),
            SurfaceCall::PenUp,
            SurfaceCall::Goto(Vec2::ZERO),
            SurfaceCall::SetHeading(0.0),
            SurfaceCall::PenDown,
            SurfaceCall::MoveForward(5.0),
        ]
    );
    assert_eq!(surface.drawn_segments(), 2);
}

#[test]
fn test_restore_converts_to_replay_frame() {
    let interpreter = interpreter(10.0, 90.0);
    let mut surface = RecordingSurface::new();
    let run = interpreter.interpret("+a[+a]a", &mut surface).unwrap();

    // Saved at canvas (0, 10) heading 90: y flips up, heading mirrors to 270.
    assert_eq!(
        run.trace,
        "right(90)\npd();fd(10)\nright(90)\npd();fd(10)\n\
         pu();goto(0.00,-10.00);setheading(270)\npd();fd(10)\n"
    );
    assert!(run.state.position.abs_diff_eq(Vec2::new(0.0, 20.0), EPS));
    assert!((run.state.heading - 90.0).abs() < EPS);
}

#[test]
fn test_restore_never_prints_negative_zero() {
    let interpreter = interpreter(10.0, 90.0);
    let mut surface = RecordingSurface::new();
    // The saved x is cos(90°) * 10, a tiny negative number.
    let run = interpreter.interpret("+a[a]", &mut surface).unwrap();
    assert!(run.trace.ends_with("pu();goto(0.00,-10.00);setheading(270)\n"));
    assert!(!run.trace.contains("-0.00"));
}

#[test]
fn test_unrecognized_symbol_after_drawing() {
    let interpreter = interpreter(10.0, 90.0);
    let mut surface = RecordingSurface::new();
    let mut trace = String::new();

    let err = interpreter
        .interpret_into("ax", &mut surface, &mut trace)
        .unwrap_err();

    assert!(matches!(err, LSystemError::UnrecognizedSymbol('x')));
    // The `a` was drawn and traced before the abort.
    assert_eq!(trace, "pd();fd(10)\n");
    assert_eq!(surface.drawn_segments(), 1);
}

#[test]
fn test_pop_on_empty_stack_stops_immediately() {
    let interpreter = interpreter(10.0, 90.0);
    let mut surface = RecordingSurface::new();
    let mut trace = String::new();

    let err = interpreter
        .interpret_into("a]a", &mut surface, &mut trace)
        .unwrap_err();

    assert!(matches!(err, LSystemError::UnbalancedBracket));
    assert_eq!(trace, "pd();fd(10)\n");
    assert_eq!(surface.drawn_segments(), 1);
}

#[test]
fn test_move_and_reverse() {
    let interpreter = interpreter(3.0, 45.0);
    let mut surface = RecordingSurface::new();
    let run = interpreter.interpret("b*a-", &mut surface).unwrap();

    assert_eq!(run.trace, "pu();fd(3)\nright(180)\npd();fd(3)\nleft(45)\n");
    assert!(run.state.position.abs_diff_eq(Vec2::ZERO, EPS));
    assert!((run.state.heading - 135.0).abs() < EPS);
    assert_eq!(surface.drawn_segments(), 1);
}

#[test]
fn test_color_cycles_only_on_draw() {
    let interpreter = TurtleInterpreter::new(TurtleConfig {
        step_length: 1.0,
        turn_angle: 90.0,
        color_cycling: true,
    });
    let mut surface = RecordingSurface::new();
    interpreter.interpret("a+ba", &mut surface).unwrap();

    let colors: Vec<[u8; 3]> = surface
        .calls
        .iter()
        .filter_map(|call| match call {
            SurfaceCall::SetPenColor(rgb) => Some(*rgb),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec![[254, 1, 0], [253, 2, 0]]);
}
