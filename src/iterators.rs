use crate::types::*;

/// Walks the cells of a list, yielding each head.
///
/// Iteration stops at the first node that is not a `'.'/2` cell; that node
/// is then available from [`ListIter::tail`].
#[derive(Debug, Clone)]
pub struct ListIter<'a> {
    current: &'a Term,
}

impl<'a> ListIter<'a> {
    #[inline]
    pub fn new(term: &'a Term) -> Self {
        ListIter { current: term }
    }

    /// The node reached so far. After exhausting the iterator this is `[]`
    /// for a proper list, a variable for a partial list, and anything else
    /// for a malformed one.
    #[inline]
    pub fn tail(&self) -> &'a Term {
        self.current
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Term;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Term::Compound(name, args) if args.len() == 2 && name == CONS => {
                self.current = &args[1];
                Some(&args[0])
            }
            _ => None,
        }
    }
}

/// Splits a list into its elements and its final tail.
pub fn list_elements(term: &Term) -> (Vec<Term>, Term) {
    let mut iter = ListIter::new(term);
    let elements = iter.by_ref().cloned().collect();

    (elements, iter.tail().clone())
}

/// The node at the end of a chain of list cells.
pub fn list_tail(term: &Term) -> &Term {
    let mut iter = ListIter::new(term);
    iter.by_ref().for_each(drop);
    iter.tail()
}

/// Builds list cells around `elements`, right to left, ending in `tail`.
pub fn build_list(elements: Vec<Term>, tail: Term) -> Term {
    elements
        .into_iter()
        .rev()
        .fold(tail, |acc, element| Term::cons(element, acc))
}
