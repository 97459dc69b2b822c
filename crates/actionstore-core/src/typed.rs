//! Typed - 型付き引数の Action
//!
//! # 二層構造
//! - **表層（Typed）**: `TypedAction` - 引数の型を `Args` で宣言する
//! - **内部（Dyn）**: `Action` - object-safe。`Typed<A>` が位置引数を
//!   `A::Args` にデコードして橋渡しする

use serde::de::DeserializeOwned;

use crate::action::Action;
use crate::domain::{ActionArgs, ActionCode, ActionError, CodeError};

/// An action whose arguments decode into a fixed type.
///
/// ```ignore
/// struct TakeCard { table: Arc<Mutex<Table>> }
///
/// impl TypedAction for TakeCard {
///     const CODE: &'static str = "game.take-card";
///     type Args = (u32,);
///
///     fn perform(&self, (player,): (u32,)) -> Result<(), ActionError> {
///         // ...
///         Ok(())
///     }
/// }
/// ```
pub trait TypedAction: Send + Sync + 'static {
    const CODE: &'static str;

    type Args: DeserializeOwned;

    fn perform(&self, args: Self::Args) -> Result<(), ActionError>;
}

/// Adapter exposing a `TypedAction` through the object-safe `Action`.
pub struct Typed<A: TypedAction> {
    code: ActionCode,
    action: A,
}

impl<A: TypedAction> Typed<A> {
    pub fn new(action: A) -> Result<Self, CodeError> {
        Ok(Self {
            code: ActionCode::new(A::CODE)?,
            action,
        })
    }

    pub fn inner(&self) -> &A {
        &self.action
    }
}

impl<A: TypedAction> Action for Typed<A> {
    fn code(&self) -> &ActionCode {
        &self.code
    }

    fn invoke(&self, args: &ActionArgs) -> Result<(), ActionError> {
        let args = args.decode::<A::Args>()?;
        self.action.perform(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Deal {
        dealt: Mutex<Vec<(u32, u32)>>,
    }

    impl TypedAction for Deal {
        const CODE: &'static str = "game.deal";
        type Args = (u32, u32);

        fn perform(&self, (player, count): (u32, u32)) -> Result<(), ActionError> {
            if count == 0 {
                return Err(ActionError::rejected("count must be positive"));
            }
            self.dealt.lock().unwrap().push((player, count));
            Ok(())
        }
    }

    struct Reset;

    impl TypedAction for Reset {
        const CODE: &'static str = "game.reset";
        type Args = ();

        fn perform(&self, _args: ()) -> Result<(), ActionError> {
            Ok(())
        }
    }

    struct Nameless;

    impl TypedAction for Nameless {
        const CODE: &'static str = "";
        type Args = ();

        fn perform(&self, _args: ()) -> Result<(), ActionError> {
            Ok(())
        }
    }

    #[test]
    fn typed_action_uses_its_constant_code() {
        let action = Typed::new(Deal::default()).unwrap();
        assert_eq!(action.code().as_str(), "game.deal");
    }

    #[test]
    fn typed_action_decodes_positional_args() {
        let action = Typed::new(Deal::default()).unwrap();
        action
            .invoke(&ActionArgs::new(vec![json!(2), json!(5)]))
            .unwrap();
        assert_eq!(*action.inner().dealt.lock().unwrap(), vec![(2, 5)]);
    }

    #[test]
    fn typed_action_reports_bad_args_before_performing() {
        let action = Typed::new(Deal::default()).unwrap();
        let err = action
            .invoke(&ActionArgs::new(vec![json!("two")]))
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidArguments(_)));
        assert!(action.inner().dealt.lock().unwrap().is_empty());
    }

    #[test]
    fn typed_action_failure_passes_through() {
        let action = Typed::new(Deal::default()).unwrap();
        let err = action
            .invoke(&ActionArgs::new(vec![json!(1), json!(0)]))
            .unwrap_err();
        assert!(matches!(err, ActionError::Rejected(_)));
    }

    #[test]
    fn unit_args_accept_empty_list() {
        let action = Typed::new(Reset).unwrap();
        action.invoke(&ActionArgs::empty()).unwrap();
    }

    #[test]
    fn empty_constant_code_is_rejected() {
        assert!(matches!(Typed::new(Nameless), Err(CodeError::Empty)));
    }
}
