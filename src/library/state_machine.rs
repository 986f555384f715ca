use std::marker::PhantomData;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

/// Elm-style loop: every event goes through `transition_fn`, the new state is
/// rendered, and the returned effects run. Effects for which
/// `is_background_fn` holds get their own thread; the rest run in order on the
/// loop thread. Effects report back by sending events on the channel.
pub struct StateMachine<TState, TEvent, TEffect, T, R, E, D, B>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
    D: Fn(&TState) -> bool + Send + Sync,
    B: Fn(&TEffect) -> bool + Send + Sync,
{
    pub init: (TState, Vec<TEffect>),
    pub transition_fn: Arc<T>,
    pub render_fn: Arc<R>,
    pub run_effect_fn: Arc<E>,
    pub is_done_fn: Arc<D>,
    pub is_background_fn: Arc<B>,
    _event: PhantomData<TEvent>,
}

impl<TState, TEvent, TEffect, T, R, E, D, B> StateMachine<TState, TEvent, TEffect, T, R, E, D, B>
where
    TState: Clone + Send + 'static,
    TEvent: Send + 'static,
    TEffect: Clone + Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) + Send + Sync + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TState) -> bool + Send + Sync + 'static,
    B: Fn(&TEffect) -> bool + Send + Sync + 'static,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        is_done_fn: D,
        is_background_fn: B,
    ) -> Self {
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            is_done_fn: Arc::new(is_done_fn),
            is_background_fn: Arc::new(is_background_fn),
            _event: PhantomData,
        }
    }

    /// Runs until a state satisfies `is_done_fn` and returns that state.
    ///
    /// The effects produced by the final transition run inline so their
    /// cleanup finishes before this returns.
    pub fn run(
        &self,
        event_sender: Sender<TEvent>,
        event_receiver: Receiver<TEvent>,
    ) -> Result<TState, Box<dyn std::error::Error + Send + Sync>> {
        let (mut state, effects) = self.init.clone();

        (self.render_fn)(&state);
        self.run_effects(effects, &event_sender);

        loop {
            let event = event_receiver.recv()?;

            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;

            (self.render_fn)(&state);

            if (self.is_done_fn)(&state) {
                for effect in new_effects {
                    (self.run_effect_fn)(effect, event_sender.clone());
                }
                return Ok(state);
            }

            self.run_effects(new_effects, &event_sender);
        }
    }

    fn run_effects(&self, effects: Vec<TEffect>, event_sender: &Sender<TEvent>) {
        for effect in effects {
            if !(self.is_background_fn)(&effect) {
                (self.run_effect_fn)(effect, event_sender.clone());
                continue;
            }

            let effect_sender = event_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            std::thread::spawn(move || {
                run_effect_fn(effect, effect_sender);
            });
        }
    }
}
