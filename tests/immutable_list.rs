use helper_utils::prelude::*;

#[test]
fn test_copy_of_single_item() {
    let output = copy_of(vec!["a"]);
    assert_eq!(output, ["a"]);
}

#[test]
fn test_copy_of_multiple_items() {
    let output = copy_of(["a", "b", "c"]);
    assert_eq!(output, ["a", "b", "c"]);
    assert_eq!(output.len(), 3);
    assert_eq!(output[1], "b");
}

#[test]
fn test_modifying_input_does_not_affect_copy() {
    let mut input = vec![String::from("a")];
    let output = copy_of(input.iter().cloned());

    input.push(String::from("b"));
    input[0].push('!');

    assert_eq!(output, [String::from("a")]);
}

#[test]
fn test_iterates_in_order() {
    let output: ImmutableList<u32> = (1..=4).collect();
    let seen: Vec<u32> = output.iter().copied().collect();
    assert_eq!(seen, vec![1, 2, 3, 4]);

    let mut sum = 0;
    for value in &output {
        sum += value;
    }
    assert_eq!(sum, 10);
}
