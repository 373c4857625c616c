use std::collections::BTreeSet;

use parking_lot::Mutex;

use super::Backend;
use crate::{attribute::AttributeBinding, buffer::BufferType, Error};

/// A single call made against a [RecordingBackend].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateVertexArray(u32),
    CreateBuffer(u32),
    BindVertexArray(Option<u32>),
    BindBuffer(BufferType, Option<u32>),
    BufferData {
        target: BufferType,
        data: Vec<u8>,
    },
    VertexAttribPointer(AttributeBinding),
    EnableVertexAttribArray(u32),
    DrawElements(u32),
    DeleteVertexArray(u32),
    DeleteBuffer(u32),
}

#[derive(Debug, Default)]
struct State {
    next_handle: u32,
    allocations: usize,
    fail_after: Option<usize>,
    live: BTreeSet<u32>,
}

/// A [Backend] that draws nothing and remembers everything it was asked to do.
///
/// Handles are plain integers starting at 1, unique across vertex arrays and buffers.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    state: Mutex<State>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose allocations succeed `n` times, then fail.
    pub fn failing_after(n: usize) -> Self {
        let res = Self::default();
        res.state.lock().fail_after = Some(n);
        res
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Handles that have been created but not yet deleted.
    pub fn live_handles(&self) -> Vec<u32> {
        self.state.lock().live.iter().copied().collect()
    }

    /// Attribute slots enabled so far, in call order.
    pub fn enabled_slots(&self) -> Vec<u32> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::EnableVertexAttribArray(slot) => Some(*slot),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded calls for which `pred` holds.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|&call| pred(call)).count()
    }

    pub fn deletions(&self) -> Vec<u32> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::DeleteVertexArray(h) | Call::DeleteBuffer(h) => Some(*h),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        tracing::trace!(?call, "backend call");
        self.calls.lock().push(call);
    }

    fn allocate(&self, kind: &str) -> Result<u32, Error> {
        let mut state = self.state.lock();
        if state.fail_after.is_some_and(|n| state.allocations >= n) {
            return Err(Error::Backend(format!("out of {kind} handles")));
        }
        state.allocations += 1;
        state.next_handle += 1;
        let handle = state.next_handle;
        state.live.insert(handle);
        Ok(handle)
    }

    fn release(&self, handle: u32) {
        if !self.state.lock().live.remove(&handle) {
            tracing::warn!(handle, "deleted a handle that was not live");
        }
    }
}

impl Backend for RecordingBackend {
    type VertexArray = u32;
    type Buffer = u32;

    fn create_vertex_array(&self) -> Result<u32, Error> {
        let handle = self.allocate("vertex array")?;
        self.record(Call::CreateVertexArray(handle));
        Ok(handle)
    }

    fn create_buffer(&self) -> Result<u32, Error> {
        let handle = self.allocate("buffer")?;
        self.record(Call::CreateBuffer(handle));
        Ok(handle)
    }

    fn bind_vertex_array(&self, array: Option<u32>) {
        self.record(Call::BindVertexArray(array));
    }

    fn bind_buffer(&self, target: BufferType, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: BufferType, data: &[u8]) {
        self.record(Call::BufferData {
            target,
            data: data.to_vec(),
        });
    }

    fn vertex_attrib_pointer(&self, binding: &AttributeBinding) {
        self.record(Call::VertexAttribPointer(*binding));
    }

    fn enable_vertex_attrib_array(&self, slot: u32) {
        self.record(Call::EnableVertexAttribArray(slot));
    }

    fn draw_elements(&self, count: u32) {
        self.record(Call::DrawElements(count));
    }

    fn delete_vertex_array(&self, array: u32) {
        self.release(array);
        self.record(Call::DeleteVertexArray(array));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.release(buffer);
        self.record(Call::DeleteBuffer(buffer));
    }
}
