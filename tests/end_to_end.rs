//! End-to-end training and classification tests.

use entropy_tree::*;

mod common;
use common::*;

#[test]
fn test_separable_example() {
    let training = separable_training();
    let tree = DecisionTree::train(&training).unwrap();

    assert_eq!(
        tree.root(),
        &TreeNode::decision(1, 5.0, TreeNode::leaf(0), TreeNode::leaf(1))
    );

    let split = select_best(training.records(), training.schema()).unwrap();
    assert_eq!(split.weighted_entropy, 0.0);

    let point = record(TEST_LABEL, &[(1, 1.5), (2, 5.0)]);
    assert_eq!(tree.classify(&point), 0);
}

#[test]
fn test_text_pipeline() {
    let input = "\
0 1:1.0 2:5.0
0 1:2.0 2:5.0
1 1:8.0 2:1.0
-1 1:1.5 2:5.0
1 1:9.0 2:1.0
-1 1:8.5 2:1.0
-1 1:5.0 2:3.0
";
    let dataset = load_from_str(input).unwrap();
    let tree = DecisionTree::train(&dataset.training()).unwrap();
    let lines: Vec<String> = Predictor::new(&tree)
        .predict_dataset(&dataset)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        lines,
        vec![
            "Testing point 0 belongs to class: 0",
            "Testing point 1 belongs to class: 1",
            "Testing point 2 belongs to class: 0",
        ]
    );
}

#[test]
fn test_three_class_two_levels() {
    // Attribute 1 separates class 0 from {1, 2}; attribute 2 then separates
    // class 1 from class 2 on the right branch.
    let input = "\
0 1:1.0 2:7.0
0 1:2.0 2:1.0
0 1:1.5 2:4.0
1 1:8.0 2:1.0
1 1:9.0 2:2.0
2 1:8.5 2:8.0
2 1:9.5 2:9.0
-1 1:1.0 2:9.0
-1 1:9.0 2:1.5
-1 1:9.0 2:8.5
";
    let dataset = load_from_str(input).unwrap();
    let tree = DecisionTree::train(&dataset.training()).unwrap();

    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.root().split(), Some((1, 5.0)));
    assert_eq!(tree.root().left(), Some(&TreeNode::leaf(0)));
    assert_eq!(tree.root().right().and_then(TreeNode::split), Some((2, 5.0)));

    let classes: Vec<ClassLabel> = Predictor::new(&tree)
        .predict_dataset(&dataset)
        .into_iter()
        .map(|p| p.class)
        .collect();
    assert_eq!(classes, vec![0, 1, 2]);
}

#[test]
fn test_tied_depth_two_leaf_uses_smaller_label() {
    // The right branch {1, 2, 1, 2} splits on attribute 2 into two halves
    // of one record per class each; both leaves resolve the tie to class 1.
    let input = "\
0 1:0.0 2:0.0
0 1:0.0 2:1.0
1 1:5.0 2:0.0
2 1:5.0 2:0.0
2 1:5.0 2:9.0
1 1:5.0 2:9.0
-1 1:6.0 2:0.0
-1 1:6.0 2:9.0
";
    let dataset = load_from_str(input).unwrap();
    let tree = DecisionTree::train(&dataset.training()).unwrap();
    let predictions = Predictor::new(&tree).predict_dataset(&dataset);
    assert_eq!(predictions[0].class, 1);
    assert_eq!(predictions[1].class, 1);
}

#[test]
fn test_test_value_equal_to_threshold_goes_left() {
    let tree = DecisionTree::train(&separable_training()).unwrap();
    let point = record(TEST_LABEL, &[(1, 5.0), (2, 0.0)]);
    assert_eq!(tree.classify(&point), 0);
}

#[test]
fn test_rebuild_is_identical() {
    let training = random_training(7, 60, 4, 3);
    let first = DecisionTree::train(&training).unwrap();
    let second = DecisionTree::train(&training).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_build_matches_sequential() {
    for seed in 0..10 {
        let training = random_training(seed, 40, 3, 4);
        let sequential = TreeBuilder::new().build(&training).unwrap();
        let parallel = TreeBuilder::new()
            .parallel_branches(true)
            .build(&training)
            .unwrap();
        assert_eq!(sequential, parallel, "seed {}", seed);
    }
}

#[test]
fn test_builder_from_config() {
    let config = ConfigBuilder::new().parallel_branches(true).build().unwrap();
    let tree = TreeBuilder::from_config(&config)
        .build(&separable_training())
        .unwrap();
    assert_eq!(tree.num_leaves(), 2);
}

#[test]
fn test_every_test_record_is_classified() {
    let training = random_training(11, 50, 3, 3);
    let tree = DecisionTree::train(&training).unwrap();
    let test = random_test(12, 25, 3);
    let predictions = Predictor::new(&tree).predict_all(&test);

    assert_eq!(predictions.len(), test.len());
    let labels = ClassCount::from_records(training.records());
    for (position, prediction) in predictions.iter().enumerate() {
        assert_eq!(prediction.index, position);
        assert!(labels.get(prediction.class) > 0);
    }
}

#[test]
fn test_no_training_rows() {
    let dataset = load_from_str("-1 1:1.0\n-1 1:2.0\n").unwrap();
    assert!(matches!(
        DecisionTree::train(&dataset.training()),
        Err(TreeError::Dataset { .. })
    ));
}

#[test]
fn test_depth_one_threshold_may_equal_value_on_other_branch() {
    let training = Dataset::new(vec![
        record(0, &[(1, 2.0), (2, 4.0)]),
        record(1, &[(1, 2.0), (2, 6.0)]),
        record(2, &[(1, 8.0), (2, 5.0)]),
        record(2, &[(1, 9.0), (2, 5.0)]),
    ])
    .unwrap();
    let tree = DecisionTree::train(&training).unwrap();

    // The left subset {4.0, 6.0} splits at 5.0, a value only the right
    // branch carries.
    assert_eq!(
        tree.root(),
        &TreeNode::decision(
            1,
            5.0,
            TreeNode::decision(2, 5.0, TreeNode::leaf(0), TreeNode::leaf(1)),
            TreeNode::leaf(2),
        )
    );
    for record in training.records() {
        assert_eq!(tree.classify(record), record.label());
    }
}
