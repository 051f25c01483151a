use std::fmt::Debug;

use crate::arena::Arena;
use crate::node::{get_l, get_r};

/// Renders the subtree as an indented box-drawing dump.
///
/// ```text
/// Node[0] [h=2] 10
/// ├─ L: Node[1] [h=1] 5
/// └─ R: Node[2] [h=1] 15
/// ```
///
/// Absent children of an inner node print as `∅`; leaves print no branches.
pub fn print<T: Debug>(arena: &Arena<T>, node: Option<u32>, tab: &str) -> String {
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i];
    let mut out = format!("Node[{i}] [h={}] {:?}", n.height, n.payload);
    if n.is_leaf() {
        return out;
    }
    let children = [("L", get_l(arena, i)), ("R", get_r(arena, i))];
    for (k, (side, child)) in children.into_iter().enumerate() {
        let is_last = k == 1;
        let branch = if is_last { "└─" } else { "├─" };
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        out.push_str(&format!(" {side}: "));
        out.push_str(&print(arena, child, &child_tab));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::insert_value;

    #[test]
    fn test_print_dump() {
        let less = |a: &i32, b: &i32| a < b;
        let mut arena = Arena::new();
        let mut root = None;
        for v in [10, 5, 15, 3] {
            root = Some(insert_value(&mut arena, root, &less, v).unwrap());
        }
        let expected = "Node[0] [h=3] 10\n\
                        ├─ L: Node[1] [h=2] 5\n\
                        │  ├─ L: Node[3] [h=1] 3\n\
                        │  └─ R: ∅\n\
                        └─ R: Node[2] [h=1] 15";
        assert_eq!(print(&arena, root, ""), expected);
    }

    #[test]
    fn test_print_empty() {
        let arena = Arena::<i32>::new();
        assert_eq!(print(&arena, None, ""), "∅");
    }
}
