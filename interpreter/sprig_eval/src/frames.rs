//! The call stack: an ordered record of active invocations.
//!
//! Frames are pushed on every algorithm or structure entry and popped at the
//! matching boundary. The stack answers the two questions control flow needs:
//! the current depth (for early-exit bound checks) and whether an algorithm
//! frame is anywhere below (for `result`).

/// What kind of invocable owns a frame.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FrameKind {
    Algorithm,
    Structure,
}

/// One active invocation.
#[derive(Clone, Debug)]
pub struct Frame {
    pub kind: FrameKind,
    pub name: String,
    /// Text captured between the head's parentheses: the destination
    /// variable for algorithms, the raw argument text for structures.
    pub store: Option<String>,
}

#[derive(Default)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// The destination variable of the innermost frame, if it named one.
    pub fn current_store(&self) -> Option<&str> {
        self.current().and_then(|frame| frame.store.as_deref())
    }

    /// Whether any active frame is an algorithm call.
    pub fn has_algorithm_frame(&self) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.kind == FrameKind::Algorithm)
    }
}
