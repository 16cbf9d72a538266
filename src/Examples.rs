/// demos of the whole pipeline: parse a step, format the equation markup,
/// build the second-quantized form, inspect tooltip matrices, drive the
/// mechanism state. Choose a demo by task number.
pub mod symbolic_examples;
