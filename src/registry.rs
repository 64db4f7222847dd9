// ABOUTME: Layout registry mapping content-type tags to layouts
// ABOUTME: Built once and read-only afterwards, so it can be shared between conversions

use crate::errors::{Result, SlideError};
use crate::layouts::{builtin_layouts, SlideLayout};
use log::debug;
use std::collections::HashMap;

pub struct LayoutRegistry {
    layouts: HashMap<&'static str, Box<dyn SlideLayout>>,
}

impl LayoutRegistry {
    /// Build a registry from a layout family. Tags must be unique.
    pub fn from_layouts(layouts: Vec<Box<dyn SlideLayout>>) -> Result<Self> {
        let mut map: HashMap<&'static str, Box<dyn SlideLayout>> =
            HashMap::with_capacity(layouts.len());
        for layout in layouts {
            let tag = layout.tag();
            if map.contains_key(tag) {
                return Err(SlideError::DuplicateLayoutType(tag.to_string()));
            }
            debug!("Registered layout {}", tag);
            map.insert(tag, layout);
        }
        Ok(Self { layouts: map })
    }

    /// Registry holding the built-in title, single-column and two-column layouts.
    pub fn builtin() -> Self {
        let layouts = builtin_layouts()
            .into_iter()
            .map(|layout| (layout.tag(), layout))
            .collect();
        Self { layouts }
    }

    /// Layout registered under `tag`, if any.
    pub fn lookup(&self, tag: &str) -> Option<&dyn SlideLayout> {
        self.layouts.get(tag).map(|layout| layout.as_ref())
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.layouts.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
