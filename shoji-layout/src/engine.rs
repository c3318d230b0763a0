use crate::geometry::WindowLocation;

/// A tiling algorithm hosted by one workspace.
///
/// `calc_layout` never mutates the engine. The adjustment operations change
/// state that is read back on the next `calc_layout`; engines without a
/// main/stack split treat them as no-ops.
pub trait LayoutEngine {
    /// Name the host uses to display and select this engine.
    fn name(&self) -> &'static str;

    /// Returns one location per window, in input order. The windows
    /// themselves are never inspected; only their count and position matter.
    fn calc_layout<W>(
        &self,
        windows: &[W],
        space_width: u32,
        space_height: u32,
    ) -> Vec<WindowLocation>;

    fn shrink_primary_area(&mut self);

    fn expand_primary_area(&mut self);

    fn reset_primary_area(&mut self);

    fn increment_num_in_primary(&mut self);

    fn decrement_num_in_primary(&mut self);

    /// Swap the primary area to the other side.
    fn flip_primary_area(&mut self);
}
