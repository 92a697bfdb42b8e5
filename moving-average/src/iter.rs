use crate::Block;

/// Drives a [Block] one sample at a time from an iterator.
#[derive(Clone)]
pub struct BlockIter<I, B>
where
    I: Iterator<Item = B::Input>,
    B: Block,
{
    block: B,
    source: I,
}

impl<I, B> BlockIter<I, B>
where
    I: Iterator<Item = B::Input>,
    B: Block,
{
    pub fn new(source: I, block: B) -> Self {
        BlockIter { source, block }
    }

    pub fn get_block(&self) -> &B {
        &self.block
    }
}

impl<I, B> Iterator for BlockIter<I, B>
where
    I: Iterator<Item = B::Input>,
    B: Block,
{
    type Item = B::Output;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.source.next()?;
            let mut output = [B::Output::default()];
            if self.block.work(&[value], &mut output).produced == 1 {
                let [value] = output;
                return Some(value);
            }
        }
    }
}

pub trait BlockFilter<I, B>
where
    I: Iterator<Item = B::Input>,
    B: Block,
{
    fn through(self, block: B) -> BlockIter<I, B>;
}

impl<I, B> BlockFilter<I, B> for I
where
    I: Iterator<Item = B::Input>,
    B: Block,
{
    fn through(self, block: B) -> BlockIter<I, B> {
        BlockIter::<I, B>::new(self, block)
    }
}
