//! Builds a stack of words with printer and finalizer hooks, grows it past
//! its initial capacity, renders it, and destroys it with the diagnostic
//! stream visible.

use growstack_rs::collections::stack::{GrowableStack, StackHooks};

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  let hooks = StackHooks::new()
    .with_printer(|word: &String| word.clone())
    .with_finalizer(|word: String| println!("releasing {word}"));

  let mut stack = match GrowableStack::with_hooks(2, hooks) {
    | Ok(stack) => stack,
    | Err(error) => {
      eprintln!("stack creation failed: {error}");
      return;
    },
  };

  for word in ["alpha", "beta", "gamma"] {
    if let Err(error) = stack.push(word.to_string()) {
      eprintln!("push failed: {error}");
      return;
    }
  }

  match stack.render() {
    | Ok(rendered) => println!("{rendered}"),
    | Err(error) => eprintln!("render failed: {error}"),
  }

  if let Ok(top) = stack.pop() {
    println!("popped {top}");
  }

  stack.destroy();
}
