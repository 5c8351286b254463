use derive_more::IsVariant;

use crate::path::Flavor;

/// A single component between separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Segment<'a> {
    /// `.`
    Cur,
    /// `..`
    Parent,
    Normal(&'a str),
}

impl<'a> Segment<'a> {
    pub const fn as_str(&self) -> &'a str {
        match self {
            Segment::Cur => ".",
            Segment::Parent => "..",
            Segment::Normal(name) => *name,
        }
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(value: &'a str) -> Self {
        match value {
            "." => Segment::Cur,
            ".." => Segment::Parent,
            name => Segment::Normal(name),
        }
    }
}

/// An iterator over the non-empty segments of a path. Repeated separators produce no empty
/// segments, and any root is treated as plain text, so callers split the root off first.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    pub(crate) flavor: Flavor,
    pub(crate) rest: &'a str,
}

impl<'a> Segments<'a> {
    pub const fn new(flavor: Flavor, path: &'a str) -> Segments<'a> {
        Segments {
            flavor,
            rest: path,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let flavor = self.flavor;
        self.rest = self.rest.trim_start_matches(|ch| flavor.is_sep(ch));
        if self.rest.is_empty() {
            None?
        }

        let tail = self.rest.find(|ch| flavor.is_sep(ch)).unwrap_or(self.rest.len());
        let (res, rest) = self.rest.split_at(tail);
        self.rest = rest;

        Some(Segment::from(res))
    }
}

/// Applies `.` and `..` to a sequence of segments, returning what is left.
///
/// Above a rooted path `..` has nowhere to go and is dropped. On a relative path an unmatched `..`
/// is kept, and later `..` segments stack on top of it rather than cancelling it.
pub(crate) fn collapse<'a>(segments: Segments<'a>, rooted: bool) -> Vec<&'a str> {
    let mut stack: Vec<&'a str> = Vec::new();

    for segment in segments {
        match segment {
            Segment::Cur => (),
            Segment::Parent => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                },
                _ if rooted => (),
                _ => stack.push(".."),
            },
            Segment::Normal(name) => stack.push(name),
        }
    }

    stack
}

/// Pushes `segments` onto `out`, separated by the flavor's output separator.
pub(crate) fn push_joined<'a, I>(out: &mut String, flavor: Flavor, segments: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            out.push(flavor.sep());
        }
        out.push_str(segment);
    }
}
