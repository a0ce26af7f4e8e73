use tree_sort_bench::data_gen::{DEFAULT_MAX_VALUE, generate_set};
use tree_sort_bench::tree_sort::tree_sort;
use tree_sort_bench::SortTree;

fn main() {
    let mut tree = SortTree::new();
    tree.pretty_print();

    let mut total = 0;
    for &value in &[50, 25, 75, 12, 37, 62, 87] {
        let steps = tree.insert(value);
        println!("inserted {} after {} steps", value, steps);
        total += steps;
    }
    tree.pretty_print();
    println!("height {}, total steps {}, in order {:?}", tree.height(), total, tree.in_order());

    // sorted input degenerates into a right spine
    let mut spine = SortTree::new();
    for value in 1..=5 {
        spine.insert(value);
    }
    spine.pretty_print();

    // duplicates descend right
    let (sorted, iterations) = tree_sort(&[5, 3, 8, 1, 4, 5]);
    println!("tree_sort -> {:?} in {} iterations", sorted, iterations);

    // one fresh draw in all three orderings
    let set = generate_set(200, DEFAULT_MAX_VALUE);
    for (category, values) in set.iter() {
        let (_, iterations) = tree_sort(values);
        println!("{:>14} n={} iterations={}", category.as_str(), set.size, iterations);
    }
}
