//! Line-based side-by-side diff for the migration view
//!
//! Computes an LCS alignment between the original source and the migrated
//! (or test) code, then pairs adjacent removals and additions into
//! `Modified` rows so both columns stay aligned.

use serde::Serialize;

/// Upper bound on LCS table cells; larger inputs degrade to block replacement
const MAX_LCS_CELLS: usize = 4_000_000;

/// Classification of a diff row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Unchanged,
    Removed,
    Added,
    Modified,
}

/// One side of a diff row, 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub number: usize,
    pub text: String,
}

/// Aligned pair of lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    pub kind: DiffKind,
    pub left: Option<DiffLine>,
    pub right: Option<DiffLine>,
}

/// Row counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub removed: usize,
    pub added: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn from_rows(rows: &[DiffRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            match row.kind {
                DiffKind::Unchanged => acc.unchanged += 1,
                DiffKind::Removed => acc.removed += 1,
                DiffKind::Added => acc.added += 1,
                DiffKind::Modified => acc.modified += 1,
            }
            acc
        })
    }

    pub fn is_identical(&self) -> bool {
        self.removed == 0 && self.added == 0 && self.modified == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal(usize, usize),
    Delete(usize),
    Insert(usize),
}

/// Build aligned side-by-side rows for `original` vs `modified`
pub fn side_by_side(original: &str, modified: &str) -> Vec<DiffRow> {
    let left: Vec<&str> = original.lines().collect();
    let right: Vec<&str> = modified.lines().collect();
    let ops = align(&left, &right);
    rows_from_ops(&ops, &left, &right)
}

fn align(left: &[&str], right: &[&str]) -> Vec<Op> {
    // Common prefix and suffix never need the LCS table
    let prefix = left
        .iter()
        .zip(right.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = left[prefix..]
        .iter()
        .rev()
        .zip(right[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mid_left = &left[prefix..left.len() - suffix];
    let mid_right = &right[prefix..right.len() - suffix];

    let mut ops: Vec<Op> = (0..prefix).map(|i| Op::Equal(i, i)).collect();

    let cells = (mid_left.len() + 1).saturating_mul(mid_right.len() + 1);
    if cells > MAX_LCS_CELLS {
        tracing::debug!(
            "diff input too large for LCS ({} x {} lines), using block replacement",
            mid_left.len(),
            mid_right.len()
        );
        ops.extend((0..mid_left.len()).map(|i| Op::Delete(prefix + i)));
        ops.extend((0..mid_right.len()).map(|j| Op::Insert(prefix + j)));
    } else {
        ops.extend(lcs_ops(mid_left, mid_right).into_iter().map(|op| match op {
            Op::Equal(i, j) => Op::Equal(prefix + i, prefix + j),
            Op::Delete(i) => Op::Delete(prefix + i),
            Op::Insert(j) => Op::Insert(prefix + j),
        }));
    }

    let left_tail = left.len() - suffix;
    let right_tail = right.len() - suffix;
    ops.extend((0..suffix).map(|k| Op::Equal(left_tail + k, right_tail + k)));
    ops
}

fn lcs_ops(left: &[&str], right: &[&str]) -> Vec<Op> {
    let n = left.len();
    let m = right.len();
    let width = m + 1;

    // table[i * width + j] = LCS length of left[i..] and right[j..]
    let mut table = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if left[i] == right[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if left[i] == right[j] {
            ops.push(Op::Equal(i, j));
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            ops.push(Op::Delete(i));
            i += 1;
        } else {
            ops.push(Op::Insert(j));
            j += 1;
        }
    }
    ops.extend((i..n).map(Op::Delete));
    ops.extend((j..m).map(Op::Insert));
    ops
}

fn rows_from_ops(ops: &[Op], left: &[&str], right: &[&str]) -> Vec<DiffRow> {
    let line = |lines: &[&str], idx: usize| DiffLine {
        number: idx + 1,
        text: lines[idx].to_string(),
    };

    let mut rows = Vec::with_capacity(ops.len());
    let mut deleted: Vec<usize> = Vec::new();
    let mut inserted: Vec<usize> = Vec::new();

    let flush = |rows: &mut Vec<DiffRow>, deleted: &mut Vec<usize>, inserted: &mut Vec<usize>| {
        let pairs = deleted.len().max(inserted.len());
        for k in 0..pairs {
            let l = deleted.get(k).map(|&i| line(left, i));
            let r = inserted.get(k).map(|&j| line(right, j));
            let kind = match (&l, &r) {
                (Some(_), Some(_)) => DiffKind::Modified,
                (Some(_), None) => DiffKind::Removed,
                _ => DiffKind::Added,
            };
            rows.push(DiffRow {
                kind,
                left: l,
                right: r,
            });
        }
        deleted.clear();
        inserted.clear();
    };

    for op in ops {
        match *op {
            Op::Equal(i, j) => {
                flush(&mut rows, &mut deleted, &mut inserted);
                rows.push(DiffRow {
                    kind: DiffKind::Unchanged,
                    left: Some(line(left, i)),
                    right: Some(line(right, j)),
                });
            }
            Op::Delete(i) => deleted.push(i),
            Op::Insert(j) => inserted.push(j),
        }
    }
    flush(&mut rows, &mut deleted, &mut inserted);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(rows: &[DiffRow]) -> Vec<DiffKind> {
        rows.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_identical_inputs() {
        let rows = side_by_side("a\nb\nc", "a\nb\nc");
        assert_eq!(rows.len(), 3);
        assert!(DiffStats::from_rows(&rows).is_identical());
    }

    #[test]
    fn test_single_line_change_is_modified() {
        let rows = side_by_side("var x = 1;\nfoo();", "let x = 1;\nfoo();");
        assert_eq!(kinds(&rows), vec![DiffKind::Modified, DiffKind::Unchanged]);
        assert_eq!(rows[0].left.as_ref().unwrap().text, "var x = 1;");
        assert_eq!(rows[0].right.as_ref().unwrap().text, "let x = 1;");
    }

    #[test]
    fn test_pure_insertion() {
        let rows = side_by_side("a\nc", "a\nb\nc");
        assert_eq!(
            kinds(&rows),
            vec![DiffKind::Unchanged, DiffKind::Added, DiffKind::Unchanged]
        );
        assert!(rows[1].left.is_none());
        assert_eq!(rows[1].right.as_ref().unwrap().number, 2);
    }

    #[test]
    fn test_pure_removal() {
        let rows = side_by_side("a\nb\nc", "a\nc");
        assert_eq!(
            kinds(&rows),
            vec![DiffKind::Unchanged, DiffKind::Removed, DiffKind::Unchanged]
        );
        assert_eq!(rows[1].left.as_ref().unwrap().number, 2);
    }

    #[test]
    fn test_uneven_replacement_block() {
        let rows = side_by_side("x\nold1\nold2\ny", "x\nnew1\ny");
        assert_eq!(
            kinds(&rows),
            vec![
                DiffKind::Unchanged,
                DiffKind::Modified,
                DiffKind::Removed,
                DiffKind::Unchanged
            ]
        );
        let stats = DiffStats::from_rows(&rows);
        assert_eq!(stats.modified, 1);
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.unchanged, 2);
    }

    #[test]
    fn test_empty_original() {
        let rows = side_by_side("", "line one\nline two");
        assert_eq!(kinds(&rows), vec![DiffKind::Added, DiffKind::Added]);
    }

    #[test]
    fn test_line_numbers_track_each_side() {
        let rows = side_by_side("a\nb\nc\nd", "a\nc\nd\ne");
        let last = rows.last().unwrap();
        assert_eq!(last.kind, DiffKind::Added);
        assert_eq!(last.right.as_ref().unwrap().number, 4);
        let c_row = rows
            .iter()
            .find(|r| r.left.as_ref().is_some_and(|l| l.text == "c"))
            .unwrap();
        assert_eq!(c_row.left.as_ref().unwrap().number, 3);
        assert_eq!(c_row.right.as_ref().unwrap().number, 2);
    }
}
