//! Filter and sort decorators over any teacher repository.
//!
//! # Responsibility
//! - Wrap an inner repository and expose the identical contract.
//! - Alter only the listing result; all other operations delegate.
//!
//! # Invariants
//! - Listing materializes the complete inner collection, applies the
//!   predicate/comparator, and only then applies the page window.
//!   Pagination always operates on the logical sequence, never on the
//!   physical storage order.
//! - Decorators compose: a filtered view can be sorted and the result
//!   still satisfies the repository contract.

use crate::model::teacher::{Teacher, TeacherDraft};
use crate::repo::teacher_repo::{page_slice, RepoResult, SortField, TeacherRepository};

/// Predicate used by `FilterDecorator`.
pub type TeacherPredicate = Box<dyn Fn(&Teacher) -> bool>;

/// Repository view restricted to entities matching a predicate.
///
/// `count()` reports the filtered size, so `get_k_n_short_list(count, 1)`
/// over the decorator returns exactly the filtered sequence.
pub struct FilterDecorator<R: TeacherRepository> {
    inner: R,
    predicate: TeacherPredicate,
}

impl<R: TeacherRepository> FilterDecorator<R> {
    pub fn new(inner: R, predicate: impl Fn(&Teacher) -> bool + 'static) -> Self {
        Self {
            inner,
            predicate: Box::new(predicate),
        }
    }

    /// Replaces the predicate, keeping the wrapped repository.
    pub fn set_predicate(&mut self, predicate: impl Fn(&Teacher) -> bool + 'static) {
        self.predicate = Box::new(predicate);
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn filtered(&self) -> RepoResult<Vec<Teacher>> {
        let total = self.inner.count()?;
        let all = self.inner.get_k_n_short_list(total, 1)?;
        Ok(all
            .into_iter()
            .filter(|teacher| (self.predicate)(teacher))
            .collect())
    }
}

impl<R: TeacherRepository> TeacherRepository for FilterDecorator<R> {
    fn get_by_id(&self, teacher_id: u32) -> RepoResult<Option<Teacher>> {
        self.inner.get_by_id(teacher_id)
    }

    fn get_k_n_short_list(&self, k: usize, n: usize) -> RepoResult<Vec<Teacher>> {
        Ok(page_slice(&self.filtered()?, k, n))
    }

    fn sort_by_field(&mut self, field: SortField) -> RepoResult<Vec<Teacher>> {
        self.inner.sort_by_field(field)
    }

    fn add(&mut self, draft: &TeacherDraft) -> RepoResult<Teacher> {
        self.inner.add(draft)
    }

    fn update(&mut self, teacher_id: u32, draft: &TeacherDraft) -> RepoResult<Option<Teacher>> {
        self.inner.update(teacher_id, draft)
    }

    fn delete(&mut self, teacher_id: u32) -> RepoResult<bool> {
        self.inner.delete(teacher_id)
    }

    fn count(&self) -> RepoResult<usize> {
        Ok(self.filtered()?.len())
    }

    fn save(&self) -> RepoResult<()> {
        self.inner.save()
    }
}

/// Repository view whose listing is ordered by a field.
///
/// `count()` delegates: ordering does not change the collection size.
pub struct SortDecorator<R: TeacherRepository> {
    inner: R,
    field: SortField,
    descending: bool,
}

impl<R: TeacherRepository> SortDecorator<R> {
    pub fn new(inner: R, field: SortField) -> Self {
        Self {
            inner,
            field,
            descending: false,
        }
    }

    pub fn descending(inner: R, field: SortField) -> Self {
        Self {
            inner,
            field,
            descending: true,
        }
    }

    /// Replaces the ordering field, keeping the wrapped repository.
    pub fn set_field(&mut self, field: SortField) {
        self.field = field;
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn ordered(&self) -> RepoResult<Vec<Teacher>> {
        let total = self.inner.count()?;
        let mut all = self.inner.get_k_n_short_list(total, 1)?;
        all.sort_by(|a, b| self.field.compare(a, b));
        if self.descending {
            all.reverse();
        }
        Ok(all)
    }
}

impl<R: TeacherRepository> TeacherRepository for SortDecorator<R> {
    fn get_by_id(&self, teacher_id: u32) -> RepoResult<Option<Teacher>> {
        self.inner.get_by_id(teacher_id)
    }

    fn get_k_n_short_list(&self, k: usize, n: usize) -> RepoResult<Vec<Teacher>> {
        Ok(page_slice(&self.ordered()?, k, n))
    }

    fn sort_by_field(&mut self, field: SortField) -> RepoResult<Vec<Teacher>> {
        self.inner.sort_by_field(field)
    }

    fn add(&mut self, draft: &TeacherDraft) -> RepoResult<Teacher> {
        self.inner.add(draft)
    }

    fn update(&mut self, teacher_id: u32, draft: &TeacherDraft) -> RepoResult<Option<Teacher>> {
        self.inner.update(teacher_id, draft)
    }

    fn delete(&mut self, teacher_id: u32) -> RepoResult<bool> {
        self.inner.delete(teacher_id)
    }

    fn count(&self) -> RepoResult<usize> {
        self.inner.count()
    }

    fn save(&self) -> RepoResult<()> {
        self.inner.save()
    }
}
