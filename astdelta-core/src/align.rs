//! LCS-based sequence alignment over canonical signatures.
//!
//! Reimplements autojunk-free longest-matching-block alignment as an
//! explicit component with a documented tie-breaking rule, so downstream
//! consumers get stable, reproducible opcode output: among equally long
//! matching blocks the earliest in the original sequence wins, and within
//! one original position the earliest modified position wins.
//!
//! The output is an ordered list of opcodes over half-open index ranges
//! that partition both input sequences contiguously; concatenating the
//! referenced sub-ranges reconstructs each sequence exactly. Worst case
//! is quadratic in sequence length; this is the only potentially
//! expensive stage of a comparison.

use std::collections::HashMap;
use std::hash::Hash;

/// Relationship between one range of the original sequence and one range
/// of the modified sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpTag {
    /// The ranges hold equal elements.
    Equal,
    /// The original range has no counterpart.
    Delete,
    /// The modified range has no counterpart.
    Insert,
    /// Both ranges are non-empty and differ.
    Replace,
}

/// One alignment instruction: `[i1, i2)` indexes the original sequence,
/// `[j1, j2)` the modified one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

/// A maximal run of equal elements: `a[a..a+size] == b[b..b+size]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MatchBlock {
    a: usize,
    b: usize,
    size: usize,
}

/// Align two sequences and return the opcode list.
///
/// Pure function over two immutable sequences; given the same inputs the
/// opcode list is fully deterministic.
pub fn align<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<Opcode> {
    let blocks = matching_blocks(a, b);

    let mut opcodes = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    for block in &blocks {
        let tag = if i < block.a && j < block.b {
            Some(OpTag::Replace)
        } else if i < block.a {
            Some(OpTag::Delete)
        } else if j < block.b {
            Some(OpTag::Insert)
        } else {
            None
        };
        if let Some(tag) = tag {
            opcodes.push(Opcode {
                tag,
                i1: i,
                i2: block.a,
                j1: j,
                j2: block.b,
            });
        }
        i = block.a + block.size;
        j = block.b + block.size;
        if block.size > 0 {
            opcodes.push(Opcode {
                tag: OpTag::Equal,
                i1: block.a,
                i2: i,
                j1: block.b,
                j2: j,
            });
        }
    }
    opcodes
}

/// All maximal matching blocks in order, ending with a zero-size
/// sentinel at `(len(a), len(b))`.
fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchBlock> {
    let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, elt) in b.iter().enumerate() {
        b2j.entry(elt).or_default().push(j);
    }

    // Greedy recursion on the regions around each longest match,
    // expressed with an explicit queue.
    let mut queue = vec![(0usize, a.len(), 0usize, b.len())];
    let mut matches = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let m = find_longest_match(a, &b2j, alo, ahi, blo, bhi);
        if m.size > 0 {
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            matches.push(m);
        }
    }
    matches.sort_by_key(|m| (m.a, m.b));

    // Coalesce adjacent blocks so each emitted block is maximal.
    let mut blocks: Vec<MatchBlock> = Vec::new();
    for m in matches {
        if let Some(last) = blocks.last_mut() {
            if last.a + last.size == m.a && last.b + last.size == m.b {
                last.size += m.size;
                continue;
            }
        }
        blocks.push(m);
    }

    blocks.push(MatchBlock {
        a: a.len(),
        b: b.len(),
        size: 0,
    });
    blocks
}

/// Longest block of equal elements within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties are broken toward the earliest start in `a`, then in `b`, which
/// is what makes the overall alignment deterministic.
fn find_longest_match<T: Eq + Hash>(
    a: &[T],
    b2j: &HashMap<&T, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchBlock {
    let mut best = MatchBlock {
        a: alo,
        b: blo,
        size: 0,
    };

    // j2len[j] = length of the longest match ending at a[i - 1], b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, elt) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(indices) = b2j.get(elt) {
            for &j in indices {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = match j.checked_sub(1) {
                    Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                new_j2len.insert(j, k);
                if k > best.size {
                    best = MatchBlock {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        size: k,
                    };
                }
            }
        }
        j2len = new_j2len;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Opcodes must partition both sequences contiguously and in order.
    fn assert_partitions(opcodes: &[Opcode], a_len: usize, b_len: usize) {
        let (mut i, mut j) = (0usize, 0usize);
        for op in opcodes {
            assert_eq!(op.i1, i);
            assert_eq!(op.j1, j);
            assert!(op.i2 >= op.i1);
            assert!(op.j2 >= op.j1);
            match op.tag {
                OpTag::Equal => {
                    assert_eq!(op.i2 - op.i1, op.j2 - op.j1);
                    assert!(op.i2 > op.i1);
                }
                OpTag::Delete => {
                    assert!(op.i2 > op.i1);
                    assert_eq!(op.j1, op.j2);
                }
                OpTag::Insert => {
                    assert_eq!(op.i1, op.i2);
                    assert!(op.j2 > op.j1);
                }
                OpTag::Replace => {
                    assert!(op.i2 > op.i1);
                    assert!(op.j2 > op.j1);
                }
            }
            i = op.i2;
            j = op.j2;
        }
        assert_eq!(i, a_len);
        assert_eq!(j, b_len);
    }

    #[test]
    fn test_identical_sequences_single_equal() {
        let a = seq(&["f", "g", "h"]);
        let opcodes = align(&a, &a);
        assert_eq!(
            opcodes,
            vec![Opcode {
                tag: OpTag::Equal,
                i1: 0,
                i2: 3,
                j1: 0,
                j2: 3,
            }]
        );
    }

    #[test]
    fn test_empty_sequences() {
        let empty: Vec<String> = Vec::new();
        assert!(align(&empty, &empty).is_empty());

        let a = seq(&["f"]);
        let opcodes = align(&a, &empty);
        assert_eq!(opcodes.len(), 1);
        assert_eq!(opcodes[0].tag, OpTag::Delete);

        let opcodes = align(&empty, &a);
        assert_eq!(opcodes.len(), 1);
        assert_eq!(opcodes[0].tag, OpTag::Insert);
    }

    #[test]
    fn test_disjoint_sequences_replace() {
        let a = seq(&["f", "g"]);
        let b = seq(&["x", "y", "z"]);
        let opcodes = align(&a, &b);
        assert_eq!(
            opcodes,
            vec![Opcode {
                tag: OpTag::Replace,
                i1: 0,
                i2: 2,
                j1: 0,
                j2: 3,
            }]
        );
    }

    #[test]
    fn test_middle_replacement() {
        let a = seq(&["f", "g", "h"]);
        let b = seq(&["f", "q", "h"]);
        let opcodes = align(&a, &b);
        assert_eq!(opcodes.len(), 3);
        assert_eq!(opcodes[0].tag, OpTag::Equal);
        assert_eq!(opcodes[1].tag, OpTag::Replace);
        assert_eq!(opcodes[2].tag, OpTag::Equal);
        assert_partitions(&opcodes, 3, 3);
    }

    #[test]
    fn test_insert_and_delete() {
        let a = seq(&["f", "g", "h"]);
        let b = seq(&["f", "h", "k"]);
        let opcodes = align(&a, &b);
        assert_partitions(&opcodes, 3, 3);
        assert!(opcodes.iter().any(|op| op.tag == OpTag::Delete));
        assert!(opcodes.iter().any(|op| op.tag == OpTag::Insert));
    }

    #[test]
    fn test_partition_invariant_on_mixed_input() {
        let a = seq(&["a", "b", "c", "d", "e", "b", "f"]);
        let b = seq(&["b", "c", "x", "e", "b", "g", "h"]);
        let opcodes = align(&a, &b);
        assert_partitions(&opcodes, a.len(), b.len());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let a = seq(&["a", "b", "a", "b", "a"]);
        let b = seq(&["b", "a", "b", "a", "b"]);
        let first = align(&a, &b);
        for _ in 0..10 {
            assert_eq!(align(&a, &b), first);
        }
    }

    #[test]
    fn test_prefers_earliest_match_on_tie() {
        // "a" appears twice in b; the earliest occurrence anchors the match.
        let a = seq(&["a"]);
        let b = seq(&["a", "x", "a"]);
        let opcodes = align(&a, &b);
        assert_eq!(opcodes[0].tag, OpTag::Equal);
        assert_eq!((opcodes[0].j1, opcodes[0].j2), (0, 1));
    }
}
