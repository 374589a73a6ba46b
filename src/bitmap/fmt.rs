use core::fmt;

use crate::SparseBitmap;

/// Debug-formats as a bounded preview of set positions, not the raw `(gap, word)` buffer — the
/// buffer's internal encoding is an implementation detail, and printing every position for a
/// multi-million-bit bitmap would be unusable.
impl fmt::Debug for SparseBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW_LEN: usize = 16;
        let mut list = f.debug_list();
        let mut shown = 0;
        let mut truncated = false;
        for position in self.iter() {
            if shown == PREVIEW_LEN {
                truncated = true;
                break;
            }
            list.entry(&position);
            shown += 1;
        }
        list.finish()?;
        if truncated {
            write!(f, " .. ({} total)", self.cardinality())?;
        }
        Ok(())
    }
}
