use crate::view::{IntoView, Node};

/// A fixed group of children, written as a tuple: `stack((header(), body, footer))`.
pub trait ViewTuple {
    fn into_views(self) -> Vec<Node>;
}

macro_rules! impl_view_tuple {
    ( $n: tt; $( $t:ident),* ; $( $i:tt ),* ) => {
        impl< $( $t: IntoView, )* > ViewTuple for ( $( $t, )* ) {
            fn into_views(self) -> Vec<Node> {
                let mut views = Vec::with_capacity($n);
                $( views.push(self.$i.into_view()); )*
                views
            }
        }
    }
}

impl ViewTuple for () {
    fn into_views(self) -> Vec<Node> {
        Vec::new()
    }
}

impl_view_tuple!(1; V0; 0);
impl_view_tuple!(2; V0, V1; 0, 1);
impl_view_tuple!(3; V0, V1, V2; 0, 1, 2);
impl_view_tuple!(4; V0, V1, V2, V3; 0, 1, 2, 3);
impl_view_tuple!(5; V0, V1, V2, V3, V4; 0, 1, 2, 3, 4);
impl_view_tuple!(6; V0, V1, V2, V3, V4, V5; 0, 1, 2, 3, 4, 5);
impl_view_tuple!(7; V0, V1, V2, V3, V4, V5, V6; 0, 1, 2, 3, 4, 5, 6);
impl_view_tuple!(8; V0, V1, V2, V3, V4, V5, V6, V7; 0, 1, 2, 3, 4, 5, 6, 7);

impl<V: IntoView> ViewTuple for Vec<V> {
    fn into_views(self) -> Vec<Node> {
        self.into_iter().map(IntoView::into_view).collect()
    }
}
