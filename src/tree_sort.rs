use crate::Value;

/// Unbalanced binary search tree used by [`tree_sort`].
///
/// Nodes live in a single arena and refer to their children by index. Values
/// strictly less than a node go left, everything else (duplicates included)
/// goes right. Nothing is ever rebalanced.
#[derive(Debug, Default)]
pub struct SortTree {
    nodes: Vec<TreeNode>,
}

#[derive(Clone, Debug)]
struct TreeNode {
    value: Value,
    left: Option<usize>,
    right: Option<usize>,
}

impl TreeNode {
    fn leaf(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

const ROOT: usize = 0;

impl SortTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `value` and returns the number of nodes visited on the way
    /// down. Creating the root costs nothing.
    pub fn insert(&mut self, value: Value) -> u64 {
        let new_index = self.nodes.len();
        if new_index == 0 {
            self.nodes.push(TreeNode::leaf(value));
            return 0;
        }

        let mut steps = 0;
        let mut current = ROOT;
        loop {
            steps += 1;
            let node = &mut self.nodes[current];
            let slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(new_index);
                    break;
                }
            }
        }

        self.nodes.push(TreeNode::leaf(value));
        steps
    }

    /// In-order walk driven by an explicit stack, so degenerate trees of
    /// height n don't recurse n frames deep.
    pub fn in_order(&self) -> Vec<Value> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root();

        loop {
            if let Some(index) = current {
                stack.push(index);
                current = self.nodes[index].left;
            } else if let Some(index) = stack.pop() {
                let node = &self.nodes[index];
                result.push(node.value);
                current = node.right;
            } else {
                break;
            }
        }

        result
    }

    /// Number of levels on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(usize, usize)> = self.root().map(|r| (r, 1)).into_iter().collect();

        while let Some((index, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[index];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() { None } else { Some(ROOT) }
    }

    pub fn pretty_print(&self) {
        println!("\n=== Tree Sort BST ===");
        if self.is_empty() {
            println!("  (empty tree)");
        } else {
            for line in self.render_lines() {
                println!("{}", line);
            }
        }
        println!("=====================\n");
    }

    // right subtree is printed above the left one, same as a sideways tree
    fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(ROOT, String::new(), true)];

        while let Some((index, prefix, is_tail)) = stack.pop() {
            let node = &self.nodes[index];
            lines.push(format!(
                "{}{} {}",
                prefix,
                if is_tail { "└──" } else { "├──" },
                node.value
            ));

            let child_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });
            match (node.right, node.left) {
                (Some(right), Some(left)) => {
                    stack.push((left, child_prefix.clone(), true));
                    stack.push((right, child_prefix, false));
                }
                (Some(only), None) | (None, Some(only)) => {
                    stack.push((only, child_prefix, true));
                }
                (None, None) => {}
            }
        }

        lines
    }
}

/// Sorts `values` by building an unbalanced BST and reading it back in order.
///
/// Returns the sorted values together with the number of node visits spent
/// during insertion. Ascending or strictly descending input degenerates the
/// tree into a list and costs `n(n-1)/2` visits.
///
/// ```rust
/// use tree_sort_bench::tree_sort::tree_sort;
/// let (sorted, iterations) = tree_sort(&[5, 3, 8, 1, 4]);
/// assert_eq!(sorted, vec![1, 3, 4, 5, 8]);
/// assert_eq!(iterations, 6);
/// ```
pub fn tree_sort(values: &[Value]) -> (Vec<Value>, u64) {
    if values.is_empty() {
        return (Vec::new(), 0);
    }

    let mut tree = SortTree::with_capacity(values.len());
    let iterations: u64 = values.iter().map(|&value| tree.insert(value)).sum();

    (tree.in_order(), iterations)
}
