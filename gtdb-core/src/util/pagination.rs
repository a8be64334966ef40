/// A contiguous window of an ordered result together
/// with the size of the whole result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        let Self { total, items } = self;
        Page {
            total,
            items: items.into_iter().map(f).collect(),
        }
    }
}

/// Slices `items` into the window `[from_index, from_index + count)`.
///
/// `from_index` is clamped to `[0, total]` and a non-positive
/// `count` yields an empty page. `total` is always the number
/// of `items` before slicing.
pub fn paginate<T>(items: Vec<T>, from_index: i64, count: i64) -> Page<T> {
    let total = items.len();
    if count <= 0 {
        return Page {
            total,
            items: Vec::new(),
        };
    }
    let from_index = usize::try_from(from_index.max(0))
        .unwrap_or(usize::MAX)
        .min(total);
    let count = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(total - from_index);
    let items = items.into_iter().skip(from_index).take(count).collect();
    Page { total, items }
}

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    // No offset starts at the first item, no limit takes all remaining items.
    pub fn apply<T>(&self, items: Vec<T>) -> Page<T> {
        let from_index = self.offset.map(saturating_i64).unwrap_or(0);
        let count = self.limit.map(saturating_i64).unwrap_or(i64::MAX);
        paginate(items, from_index, count)
    }
}

fn saturating_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
